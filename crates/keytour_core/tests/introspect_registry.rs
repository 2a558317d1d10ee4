//! Registry behaviour of the `Introspect` derive and `introspect_methods` attribute
//!
//! These types exist only in this test binary, so the registry here holds exactly what is declared below.

use keytour_core::introspect::{self, list_attributes, list_operations, registry};
use keytour_core::{Access, Introspect, IntrospectError, Receiver, TypeIdentity, introspect_methods};

#[derive(Introspect)]
#[introspect(rename_all = "camelCase")]
pub struct Account {
    pub owner_name: String,
    #[introspect(readonly)]
    pub account_id: u64,
    #[introspect(rename = "bal")]
    pub balance: i64,
    #[introspect(skip)]
    pub audit_trail: Vec<String>,
    pin: u16,
}

#[introspect_methods(rename_all = "camelCase")]
impl Account {
    #[introspect(skip)]
    pub fn open(owner_name: &str) -> Self {
        Self {
            owner_name: owner_name.to_string(),
            account_id: 1,
            balance: 0,
            audit_trail: Vec::new(),
            pin: 0,
        }
    }

    pub fn deposit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub fn balance_of(&self) -> i64 {
        self.balance
    }

    fn check_pin(&self, pin: u16) -> bool {
        self.pin == pin
    }
}

#[introspect_methods]
impl Account {
    pub fn close(self) -> Vec<String> {
        self.audit_trail
    }

    #[introspect(rename = "Describe")]
    pub fn describe_account() -> &'static str {
        "account"
    }
}

#[derive(Introspect)]
#[introspect(rename = "Marker")]
pub struct UnitMarker;

#[derive(Introspect)]
pub struct Pair(pub i32, pub String);

#[introspect_methods]
impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[test]
fn attributes_follow_declaration_order_and_options() {
    let descriptor = introspect::describe_type(&TypeIdentity::of::<Account>()).unwrap();
    assert_eq!(list_attributes(&descriptor).collect::<Vec<_>>(), vec!["ownerName", "accountId", "bal"]);

    let account_id = descriptor.attribute("accountId").unwrap();
    assert_eq!(account_id.access, Access::READ_ONLY);
    assert_eq!(account_id.type_name, "u64");
    assert_eq!(descriptor.attribute("ownerName").unwrap().access, Access::READ_WRITE);
    assert!(descriptor.attribute("pin").is_none());
    assert!(descriptor.attribute("auditTrail").is_none());
}

#[test]
fn operations_span_impl_blocks_in_source_order() {
    let account = Account::open("Ada");
    assert!(account.check_pin(0));

    let descriptor = introspect::describe_type(&TypeIdentity::of::<Account>()).unwrap();
    assert_eq!(
        list_operations(&descriptor).collect::<Vec<_>>(),
        vec!["deposit", "balanceOf", "close", "Describe"]
    );

    let close = descriptor.operation("close").unwrap();
    assert_eq!(close.receiver, Receiver::Owned);
    assert_eq!(close.returns, Some("Vec<String>"));

    let describe = descriptor.operation("Describe").unwrap();
    assert!(describe.is_static());
    assert_eq!(describe.returns, Some("&'static str"));
}

#[test]
fn renamed_unit_struct_has_no_members() {
    assert_eq!(UnitMarker::TYPE_NAME, "Marker");
    let descriptor = introspect::describe_type(&TypeIdentity::named("Marker")).unwrap();
    assert_eq!(list_attributes(&descriptor).count(), 0);
    assert_eq!(list_operations(&descriptor).count(), 0);
    assert!(descriptor.members().is_empty());
}

#[test]
fn tuple_fields_are_named_by_position() {
    let descriptor = introspect::describe_type(&TypeIdentity::of::<Pair>()).unwrap();
    assert_eq!(list_attributes(&descriptor).collect::<Vec<_>>(), vec!["0", "1"]);
    assert_eq!(descriptor.attribute("1").unwrap().type_name, "String");
}

#[test]
fn trait_impl_methods_are_operations_of_the_self_type() {
    assert_eq!(Pair(1, "a".to_string()).to_string(), "(1, a)");

    let descriptor = introspect::describe_type(&TypeIdentity::of::<Pair>()).unwrap();
    assert_eq!(list_operations(&descriptor).collect::<Vec<_>>(), vec!["fmt"]);
    let fmt = descriptor.operation("fmt").unwrap();
    assert_eq!(fmt.receiver, Receiver::Ref);
    assert_eq!(fmt.params[0].type_name, "&mut std::fmt::Formatter<'_>");
    assert_eq!(fmt.returns, Some("std::fmt::Result"));
}

#[test]
fn registry_lists_every_type_sorted() {
    let names = registry::type_names();
    assert_eq!(names, vec!["Account", "Marker", "Pair"]);
    assert_eq!(registry::types()[0].qualified_name(), "introspect_registry::Account");
}

#[test]
fn unknown_type_help_lists_registered_names() {
    let err = introspect::describe_type(&TypeIdentity::named("Ledger")).unwrap_err();
    assert_eq!(
        err,
        IntrospectError::UnknownType {
            identity: "Ledger".to_string(),
            registered: "Account, Marker, Pair".to_string(),
        }
    );
}

#[test]
fn type_without_derive_is_unknown() {
    let err = introspect::describe_type(&TypeIdentity::of::<String>()).unwrap_err();
    assert_eq!(err.identity(), "alloc::string::String");
}

#[cfg(feature = "serde")]
#[test]
fn descriptor_serializes_with_member_kinds() {
    let descriptor = introspect::describe_type(&TypeIdentity::of::<Pair>()).unwrap();
    let value = serde_json::to_value(descriptor.as_ref()).unwrap();
    assert_eq!(value["name"], "Pair");
    assert_eq!(value["members"][0]["kind"], "attribute");
    assert_eq!(value["members"][0]["access"]["write"], true);
}
