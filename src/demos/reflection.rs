//! `typeof` and reflection over the static type registry.
//!
//! `typeof(T)` is [`TypeIdentity::of`]; `GetProperties`/`GetMethods` are [`list_attributes`] and
//! [`list_operations`] over the descriptor returned by [`describe_type`].

use std::io::{self, Write};

use keytour_core::introspect::{describe_type, list_attributes, list_operations};
use keytour_core::{Introspect, TypeDescriptor, TypeIdentity, introspect_methods};

use super::DemoResult;
use crate::config::TourConfig;

/// The type the reflection demonstration inspects.
#[derive(Debug, Default, Clone, Introspect)]
#[introspect(rename_all = "PascalCase")]
pub struct ReflectionExampleClass {
    pub my_property: i32,
}

#[introspect_methods(rename_all = "PascalCase")]
impl ReflectionExampleClass {
    pub fn my_method(&self) {
        tracing::info!(my_property = self.my_property, "MyMethod called");
    }
}

/// Print the attribute names, then the operation names, of `descriptor`.
pub fn write_descriptor(out: &mut dyn Write, descriptor: &TypeDescriptor) -> io::Result<()> {
    writeln!(out, "Properties:")?;
    for name in list_attributes(descriptor) {
        writeln!(out, "- {name}")?;
    }
    writeln!(out, "Methods:")?;
    for name in list_operations(descriptor) {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

pub fn run_reflection(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let t = TypeIdentity::of::<ReflectionExampleClass>();
    let descriptor = describe_type(&t)?;
    write_descriptor(out, &descriptor)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn prints_properties_then_methods() {
        let mut out = Vec::new();
        run_reflection(&mut out, &TourConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Properties:\n- MyProperty\nMethods:\n- MyMethod\n"
        );
    }

    #[test]
    fn describe_by_name_matches_describe_by_id() {
        let by_id = describe_type(&TypeIdentity::of::<ReflectionExampleClass>()).unwrap();
        let by_name = describe_type(&TypeIdentity::named("ReflectionExampleClass")).unwrap();
        assert_eq!(by_id, by_name);
        assert_eq!(by_id.name(), "ReflectionExampleClass");
    }

    #[test]
    fn registered_method_is_callable_directly() {
        let example = ReflectionExampleClass { my_property: 3 };
        example.my_method();
        assert_eq!(example.my_property, 3);
    }
}
