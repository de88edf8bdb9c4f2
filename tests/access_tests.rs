//! Integration tests for name-based member access.
//!
//! Covers the three access shapes (property key, method invocation by
//! name, transform application), the string dispatch of `at`, the silent
//! treatment of missing members, and short-circuiting on empty receivers.

use maybe_chain::{Access, Maybe, Record};
use rstest::rstest;
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

/// A record with one property and one callable member, mirroring a
/// dynamically shaped object with data and behavior.
struct Account {
    owner: String,
    balance: i64,
}

impl Record for Account {
    type Field = String;

    fn field(&self, key: &str) -> Maybe<String> {
        match key {
            "owner" => Maybe::new(self.owner.clone()),
            "balance" => Maybe::new(self.balance.to_string()),
            _ => Maybe::NOTHING,
        }
    }

    fn has_method(&self, name: &str) -> bool {
        name == "describe"
    }

    fn invoke(&self, name: &str, args: Vec<String>) -> Maybe<String> {
        match name {
            "describe" => {
                let prefix = args.first().cloned().unwrap_or_else(|| "account".to_string());
                Maybe::new(format!("{prefix}: {} ({})", self.owner, self.balance))
            }
            _ => Maybe::NOTHING,
        }
    }
}

fn account() -> Maybe<Account> {
    Maybe::new(Account {
        owner: "ada".to_string(),
        balance: 100,
    })
}

// =============================================================================
// Property Lookup
// =============================================================================

#[rstest]
fn test_get_present_property() {
    assert_eq!(account().get("owner").value(), Some("ada".to_string()));
}

#[rstest]
fn test_get_absent_property_is_empty_not_error() {
    assert!(account().get("middle_name").is_nothing());
}

#[rstest]
fn test_get_on_empty_receiver_short_circuits() {
    let empty: Maybe<Account> = Maybe::NOTHING;
    assert!(empty.get("owner").is_nothing());
}

#[rstest]
fn test_get_chains_through_wrap_gate() {
    let shouted = account().get("owner").bind(|owner| owner.to_uppercase());
    assert_eq!(shouted.value(), Some("ADA".to_string()));
}

// =============================================================================
// Method Invocation by Name
// =============================================================================

#[rstest]
fn test_call_present_method_with_receiver_and_args() {
    let described = account().call("describe", vec!["ledger".to_string()]);
    assert_eq!(described.value(), Some("ledger: ada (100)".to_string()));
}

#[rstest]
fn test_call_missing_method_is_silently_empty() {
    assert!(account().call("close", Vec::new()).is_nothing());
}

#[rstest]
fn test_call_on_empty_receiver_short_circuits() {
    let empty: Maybe<Account> = Maybe::NOTHING;
    assert!(empty.call("describe", Vec::new()).is_nothing());
}

// =============================================================================
// String Dispatch (at)
// =============================================================================

#[rstest]
fn test_at_invokes_callable_member_first() {
    assert_eq!(
        account().at("describe").value(),
        Some("account: ada (100)".to_string())
    );
}

#[rstest]
fn test_at_falls_back_to_property_lookup() {
    assert_eq!(account().at("owner").value(), Some("ada".to_string()));
}

#[rstest]
fn test_at_unknown_name_is_empty() {
    assert!(account().at("nonsense").is_nothing());
}

#[rstest]
fn test_at_on_empty_receiver_short_circuits() {
    let empty: Maybe<Account> = Maybe::NOTHING;
    assert!(empty.at("describe").is_nothing());
}

// =============================================================================
// Explicit Access Shapes
// =============================================================================

#[rstest]
fn test_access_key_shape() {
    let result = account().access(Access::Key("balance"));
    assert_eq!(result.value(), Some("100".to_string()));
}

#[rstest]
fn test_access_invoke_shape() {
    let result = account().access(Access::Invoke("describe", vec!["audit".to_string()]));
    assert_eq!(result.value(), Some("audit: ada (100)".to_string()));
}

#[rstest]
fn test_access_apply_shape() {
    let result = account().access(Access::Apply(Box::new(|record| {
        record.field("owner").bind(|owner| format!("@{owner}"))
    })));
    assert_eq!(result.value(), Some("@ada".to_string()));
}

#[rstest]
fn test_access_on_empty_never_runs_transform() {
    let invocations = Cell::new(0);
    let empty: Maybe<Account> = Maybe::NOTHING;
    let result = empty.access(Access::Apply(Box::new(|_| {
        invocations.set(invocations.get() + 1);
        Maybe::NOTHING
    })));
    assert!(result.is_nothing());
    assert_eq!(invocations.get(), 0);
}

// =============================================================================
// Standard Map Records
// =============================================================================

#[rstest]
fn test_hashmap_record_lookup() {
    let record: HashMap<String, i32> = [("a".to_string(), 1), ("b".to_string(), 2)].into();
    let container = Maybe::new(record);
    assert_eq!(container.get("b").value(), Some(2));
    assert!(container.get("c").is_nothing());
}

#[rstest]
fn test_btreemap_record_lookup() {
    let record: BTreeMap<String, i32> = [("a".to_string(), 1)].into();
    let container = Maybe::new(record);
    assert_eq!(container.get("a").value(), Some(1));
}

#[rstest]
fn test_maps_have_no_callable_members() {
    let record: HashMap<String, i32> = [("get".to_string(), 1)].into();
    let container = Maybe::new(record);
    // "get" is data here, never a method.
    assert!(container.call("get", Vec::new()).is_nothing());
    assert_eq!(container.at("get").value(), Some(1));
}
