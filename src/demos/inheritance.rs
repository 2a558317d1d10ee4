//! `abstract`, `sealed`, `virtual`/`override` and `interface`.
//!
//! Rust has no class inheritance. Abstract members are required trait methods, virtual members are default trait
//! methods, an interface is a trait, and a sealed type is expressed with a supertrait nobody outside this module
//! can name.

use std::io::Write;

use keytour_core::{Introspect, introspect_methods};

use super::DemoResult;
use crate::config::TourConfig;

// ----------------------------------------------------------------------------
// abstract
// ----------------------------------------------------------------------------

/// Abstract base: every shape must provide its own area.
pub trait Shape {
    fn get_area(&self) -> f64;
}

pub struct Square {
    pub side: f64,
}

impl Shape for Square {
    fn get_area(&self) -> f64 {
        self.side * self.side
    }
}

pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn get_area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

// ----------------------------------------------------------------------------
// sealed
// ----------------------------------------------------------------------------

mod sealed {
    pub trait Sealed {}
}

/// Implementable only inside this module.
pub trait SealedClass1: sealed::Sealed {
    fn label(&self) -> &'static str;
}

pub struct SealedExample;

impl sealed::Sealed for SealedExample {}

impl SealedClass1 for SealedExample {
    fn label(&self) -> &'static str {
        "SealedClass1"
    }
}

pub fn run_abstract_sealed(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let shapes: [&dyn Shape; 2] = [&Square { side: 3.0 }, &Circle { radius: 1.0 }];
    for shape in shapes {
        writeln!(out, "{:.2}", shape.get_area())?;
    }
    writeln!(out, "{} cannot be extended outside its module", SealedExample.label())?;
    Ok(())
}

// ----------------------------------------------------------------------------
// virtual / override
// ----------------------------------------------------------------------------

pub trait Speak {
    /// Base behaviour; implementors may override it.
    fn speak(&self) -> &'static str {
        "The animal speaks."
    }
}

pub struct Animal;

impl Speak for Animal {}

pub struct Dog;

impl Speak for Dog {
    fn speak(&self) -> &'static str {
        "The dog barks."
    }
}

pub fn run_overriding(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    // Late binding: the call goes through the vtable of the concrete type.
    let animals: [&dyn Speak; 2] = [&Animal, &Dog];
    for animal in animals {
        writeln!(out, "{}", animal.speak())?;
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// interface
// ----------------------------------------------------------------------------

pub trait MyInterface {
    fn my_property(&self) -> i32;
    fn set_my_property(&mut self, value: i32);
    fn my_method(&self) -> &'static str;
}

#[derive(Debug, Default, Introspect)]
#[introspect(rename_all = "PascalCase")]
pub struct InterfaceExample {
    pub my_property: i32,
}

// Property accessors are already reported as the `MyProperty` attribute.
#[introspect_methods(rename_all = "PascalCase")]
impl MyInterface for InterfaceExample {
    #[introspect(skip)]
    fn my_property(&self) -> i32 {
        self.my_property
    }

    #[introspect(skip)]
    fn set_my_property(&mut self, value: i32) {
        self.my_property = value;
    }

    fn my_method(&self) -> &'static str {
        "MyMethod called."
    }
}

pub fn run_interfaces(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let mut example = InterfaceExample::default();
    example.set_my_property(7);
    writeln!(out, "{}", example.my_property())?;
    writeln!(out, "{}", example.my_method())?;
    Ok(())
}

// ----------------------------------------------------------------------------
// interface vs abstract
// ----------------------------------------------------------------------------

/// State an abstract base class would hold for its subclasses.
#[derive(Debug, Clone)]
pub struct AnimalBase {
    name: String,
    age: u32,
}

impl AnimalBase {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), age }
    }
}

/// Abstract class: shared state and concrete members, plus one abstract member.
pub trait Animal2 {
    fn base(&self) -> &AnimalBase;

    fn make_sound(&self) -> &'static str;

    fn name(&self) -> &str {
        &self.base().name
    }

    fn age(&self) -> u32 {
        self.base().age
    }
}

pub struct Dog2 {
    base: AnimalBase,
}

impl Dog2 {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            base: AnimalBase::new(name, age),
        }
    }
}

impl Animal2 for Dog2 {
    fn base(&self) -> &AnimalBase {
        &self.base
    }

    fn make_sound(&self) -> &'static str {
        "Woof!"
    }
}

/// Interface: signatures only, every implementor supplies everything.
pub trait IAnimal {
    fn name(&self) -> &str;
    fn age(&self) -> u32;
    fn make_sound(&self) -> &'static str;
}

#[derive(Debug, Clone, Introspect)]
#[introspect(rename_all = "PascalCase")]
pub struct Dog3 {
    pub name: String,
    pub age: u32,
}

#[introspect_methods]
impl Dog3 {
    #[introspect(skip)]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), age }
    }
}

#[introspect_methods(rename_all = "PascalCase")]
impl IAnimal for Dog3 {
    #[introspect(skip)]
    fn name(&self) -> &str {
        &self.name
    }

    #[introspect(skip)]
    fn age(&self) -> u32 {
        self.age
    }

    fn make_sound(&self) -> &'static str {
        "Woof!"
    }
}

pub fn run_interface_vs_abstract(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let dog2 = Dog2::new("Rex", 3);
    writeln!(out, "{} ({}): {}", dog2.name(), dog2.age(), dog2.make_sound())?;

    let dog3 = Dog3::new("Fido", 5);
    writeln!(
        out,
        "{} ({}): {}",
        IAnimal::name(&dog3),
        IAnimal::age(&dog3),
        dog3.make_sound()
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn capture(run: fn(&mut dyn Write, &TourConfig) -> DemoResult) -> String {
        let mut out = Vec::new();
        run(&mut out, &TourConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn abstract_shapes_report_their_area() {
        assert_eq!(
            capture(run_abstract_sealed),
            "9.00\n3.14\nSealedClass1 cannot be extended outside its module\n"
        );
    }

    #[test]
    fn dog_overrides_animal() {
        assert_eq!(capture(run_overriding), "The animal speaks.\nThe dog barks.\n");
    }

    #[test]
    fn interface_property_round_trips() {
        assert_eq!(capture(run_interfaces), "7\nMyMethod called.\n");
    }

    #[test]
    fn trait_methods_are_registered_as_operations() {
        use keytour_core::introspect::{describe_type, list_operations};
        use keytour_core::{Receiver, TypeIdentity};

        let interface = describe_type(&TypeIdentity::of::<InterfaceExample>()).unwrap();
        assert_eq!(list_operations(&interface).collect::<Vec<_>>(), vec!["MyMethod"]);
        assert_eq!(interface.operation("MyMethod").unwrap().receiver, Receiver::Ref);

        let dog = describe_type(&TypeIdentity::of::<Dog3>()).unwrap();
        assert_eq!(list_operations(&dog).collect::<Vec<_>>(), vec!["MakeSound"]);
        assert_eq!(dog.operation("MakeSound").unwrap().returns, Some("&'static str"));
    }

    #[test]
    fn both_dogs_woof() {
        assert_eq!(capture(run_interface_vs_abstract), "Rex (3): Woof!\nFido (5): Woof!\n");
    }
}
