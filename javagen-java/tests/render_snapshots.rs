//! Snapshot tests for rendered Java source.
//!
//! These tests verify that whole compilation units render byte for byte.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use javagen_java::{Annotation, Class, ClassBuilder, Field, Javadoc, Method, Visibility};

fn annotation(name: &str) -> Annotation {
    Annotation::builder()
        .name(name)
        .build()
        .expect("Failed to build annotation")
}

fn field(ty: &str, name: &str) -> Field {
    Field::builder()
        .ty(ty)
        .name(name)
        .build()
        .expect("Failed to build field")
}

fn inner(name: &str) -> Class {
    Class::builder()
        .inner_class()
        .class_name(name)
        .build()
        .expect("Failed to build inner class")
}

/// Every optional section of a class filled in, the same way for a
/// top-level and an inner class.
fn with_everything(builder: ClassBuilder) -> ClassBuilder {
    builder
        .javadoc(Javadoc::builder().build().expect("Failed to build javadoc"))
        .annotation(annotation("Test"))
        .annotation(annotation("Derp"))
        .class_name("AClassName")
        .super_class_name("AnotherClassName")
        .with_inner_class(inner("BClassName"))
        .with_inner_class(inner("CClassName"))
        .field(field("int", "test"))
        .field(field("String", "derp"))
        .method(
            Method::builder()
                .return_type("AClassName")
                .build()
                .expect("Failed to build constructor"),
        )
        .method(
            Method::builder()
                .return_type("String")
                .name("getSomething")
                .parameter("int", "test")
                .line("return doSomething();")
                .build()
                .expect("Failed to build method"),
        )
}

#[test]
fn test_class_with_everything() {
    let class = with_everything(Class::builder())
        .package_name("some.package")
        .imports([Some("com.example.*"), Some(""), Some("com.github.tadukoo.*")])
        .static_imports([
            Some("com.example.Test"),
            None,
            Some("com.github.tadukoo.test.*"),
        ])
        .build()
        .expect("Failed to build class");

    insta::assert_snapshot!("class_with_everything", class.to_string());
}

#[test]
fn test_inner_class_with_everything() {
    let class = with_everything(Class::builder().inner_class().is_static())
        .build()
        .expect("Failed to build class");

    insta::assert_snapshot!("inner_class_with_everything", class.to_string());
}

#[test]
fn test_documented_members() {
    let class = Class::builder()
        .package_name("com.example.model")
        .single_import("java.util.List")
        .javadoc(
            Javadoc::builder()
                .condensed()
                .content("A person.")
                .build()
                .expect("Failed to build javadoc"),
        )
        .class_name("Person")
        .field(
            Field::builder()
                .section_comment("Fields")
                .javadoc(
                    Javadoc::builder()
                        .condensed()
                        .content("The name")
                        .build()
                        .expect("Failed to build javadoc"),
                )
                .is_final()
                .ty("String")
                .name("name")
                .build()
                .expect("Failed to build field"),
        )
        .field(
            Field::builder()
                .is_static()
                .is_final()
                .ty("int")
                .name("MAX_AGE")
                .value("150")
                .build()
                .expect("Failed to build field"),
        )
        .method(
            Method::builder()
                .section_comment("Getters")
                .javadoc(
                    Javadoc::builder()
                        .content("Gets the name")
                        .return_val("the name")
                        .build()
                        .expect("Failed to build javadoc"),
                )
                .annotation(annotation("Nonnull"))
                .return_type("String")
                .name("getName")
                .line("return name;")
                .build()
                .expect("Failed to build method"),
        )
        .method(
            Method::builder()
                .visibility(Visibility::Protected)
                .is_static()
                .return_type("List<String>")
                .name("aliases")
                .parameter("String", "prefix")
                .throw_type("IllegalStateException")
                .line("List<String> result = lookup(prefix);")
                .line("return result;")
                .build()
                .expect("Failed to build method"),
        )
        .build()
        .expect("Failed to build class");

    insta::assert_snapshot!("documented_members", class.to_string());
}

#[test]
fn test_javadoc_with_everything() {
    let doc = Javadoc::builder()
        .content("Represents a person.")
        .content("Immutable once built.")
        .author("Logan Ferree (Tadukoo)")
        .version("Alpha v.0.1")
        .since("Alpha v.0.0.1")
        .param("name", "the person's name")
        .param("age", "the person's age")
        .return_val("a new person")
        .build()
        .expect("Failed to build javadoc");

    insta::assert_snapshot!("javadoc_with_everything", doc.to_string());
}

#[test]
fn test_condensed_javadoc_with_everything() {
    let doc = Javadoc::builder()
        .condensed()
        .content("Represents a person.")
        .author("Logan Ferree (Tadukoo)")
        .param("name", "the person's name")
        .return_val("a new person")
        .build()
        .expect("Failed to build javadoc");

    insta::assert_snapshot!("condensed_javadoc_with_everything", doc.to_string());
}
