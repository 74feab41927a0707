use mapwright::metadata::{ClassMetadata, FieldType, InheritanceType, LifecycleEvent};
use mapwright::{Builder, Fluent, Relations};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Embedded-class guard — table/entity fail fast, nothing is queued
// ---------------------------------------------------------------------------

#[test]
fn embedded_class_rejects_table() {
    let builder = Builder::new(ClassMetadata::new_embedded("Money").handle());

    let err = builder.table("money").unwrap_err();
    assert!(err.is_structural());
    assert_eq!(
        err.to_string(),
        "[table] may not be used on an embedded-class mapping"
    );
    assert!(builder.queue_handle().borrow().is_empty());
    assert!(builder.metadata().borrow().table_name().is_none());
}

#[test]
fn embedded_class_rejects_entity() {
    let builder = Builder::new(ClassMetadata::new_embedded("Money").handle());

    let err = builder.entity().unwrap_err();
    assert!(err.is_structural());
    assert!(builder.queue_handle().borrow().is_empty());
}

#[test]
fn embedded_class_still_maps_fields() {
    let builder = Builder::new(ClassMetadata::new_embedded("Money").handle());
    use mapwright::Fields;
    builder.string("currency").length(3);
    builder.build_queue().unwrap();

    assert!(builder.metadata().borrow().field("currency").is_some());
}

// ---------------------------------------------------------------------------
// Table and entity settings
// ---------------------------------------------------------------------------

#[test]
fn table_sets_name_immediately() {
    let builder = Builder::new(ClassMetadata::new("User").handle());
    builder.table("users").unwrap();

    // Immediate, no drain required.
    assert_eq!(builder.metadata().borrow().table_name(), Some("users"));
}

#[test]
fn table_callback_form() {
    let builder = Builder::new(ClassMetadata::new("User").handle());
    builder
        .table_with(|table| {
            table.name("users").schema("auth").option("charset", "utf8mb4");
            Ok(())
        })
        .unwrap();

    let metadata = builder.metadata().borrow();
    assert_eq!(metadata.table_name(), Some("users"));
    assert_eq!(metadata.table().schema.as_deref(), Some("auth"));
    assert_eq!(
        metadata.table().options.get("charset").map(String::as_str),
        Some("utf8mb4")
    );
}

#[test]
fn entity_settings_are_immediate() {
    let builder = Builder::new(ClassMetadata::new("Country").handle());
    builder
        .entity()
        .unwrap()
        .read_only()
        .repository_class("CountryRepository");

    let metadata = builder.metadata().borrow();
    assert!(metadata.is_read_only());
    assert_eq!(metadata.repository_class(), Some("CountryRepository"));
}

// ---------------------------------------------------------------------------
// Inheritance
// ---------------------------------------------------------------------------

#[test]
fn single_table_inheritance_with_discriminator() {
    let builder = Builder::new(ClassMetadata::new("Vehicle").handle());
    builder
        .single_table_inheritance()
        .column("kind")
        .map("car", "Car")
        .map("truck", "Truck");

    let metadata = builder.metadata().borrow();
    let inheritance = metadata.inheritance().unwrap();
    assert_eq!(inheritance.ty, InheritanceType::SingleTable);
    assert_eq!(
        inheritance.discriminator_column.as_ref().unwrap().name,
        "kind"
    );
    assert_eq!(
        inheritance.discriminator_map.get("truck").map(String::as_str),
        Some("Truck")
    );
}

#[test]
fn inheritance_type_token_is_validated() {
    let builder = Builder::new(ClassMetadata::new("Vehicle").handle());

    builder.inheritance("JOINED").unwrap();
    assert_eq!(
        builder.metadata().borrow().inheritance().unwrap().ty,
        InheritanceType::Joined
    );

    let err = builder.inheritance("CONCRETE").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "Inheritance type [CONCRETE] does not exist");
}

#[test]
fn discriminator_column_type_token_is_validated() {
    let builder = Builder::new(ClassMetadata::new("Vehicle").handle());
    let inheritance = builder.single_table_inheritance();

    inheritance.column_typed("kind", "integer").unwrap();
    assert_eq!(
        builder
            .metadata()
            .borrow()
            .inheritance()
            .unwrap()
            .discriminator_column
            .as_ref()
            .unwrap()
            .ty,
        FieldType::Integer
    );

    assert!(inheritance.column_typed("kind", "varchar").is_err());
}

// ---------------------------------------------------------------------------
// Lifecycle events
// ---------------------------------------------------------------------------

#[test]
fn lifecycle_callbacks_land_after_drain() {
    let builder = Builder::new(ClassMetadata::new("User").handle());
    builder
        .events()
        .pre_persist("onSave")
        .pre_persist("touch")
        .post_load("wakeUp");
    builder.build_queue().unwrap();

    let metadata = builder.metadata().borrow();
    assert_eq!(
        metadata.lifecycle_callbacks(LifecycleEvent::PrePersist),
        ["onSave", "touch"]
    );
    assert_eq!(
        metadata.lifecycle_callbacks(LifecycleEvent::PostLoad),
        ["wakeUp"]
    );
    assert!(metadata
        .lifecycle_callbacks(LifecycleEvent::PreRemove)
        .is_empty());
}

#[test]
fn events_callback_form() {
    let builder = Builder::new(ClassMetadata::new("User").handle());
    builder.events_with(|events| {
        events.pre_flush("beforeFlush");
    });
    builder.build_queue().unwrap();

    assert_eq!(
        builder
            .metadata()
            .borrow()
            .lifecycle_callbacks(LifecycleEvent::PreFlush),
        ["beforeFlush"]
    );
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[test]
fn override_rewrites_an_earlier_association() {
    let builder = Builder::new(ClassMetadata::new("User").handle());
    builder.belongs_to_many("groups", "Group");
    builder.override_mapping("groups", |mapping| {
        mapping.join_table = Some(mapwright::metadata::JoinTable {
            name: "memberships".to_string(),
        });
        Ok(())
    });
    builder.build_queue().unwrap();

    let metadata = builder.metadata().borrow();
    assert_eq!(
        metadata
            .association("groups")
            .unwrap()
            .join_table
            .as_ref()
            .unwrap()
            .name,
        "memberships"
    );
}

#[test]
fn override_of_unknown_association_fails_at_drain() {
    let builder = Builder::new(ClassMetadata::new("User").handle());
    builder.override_mapping("missing", |_| Ok(()));

    let err = builder.build_queue().unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "Association [missing] does not exist and cannot be overridden"
    );
}

// ---------------------------------------------------------------------------
// Embedded value objects
// ---------------------------------------------------------------------------

#[test]
fn embed_guesses_the_field_name() {
    let builder = Builder::new(ClassMetadata::new("Product").handle());
    builder.embed("app::values::Prices");
    builder.build_queue().unwrap();

    let metadata = builder.metadata().borrow();
    let mapping = metadata.embedded("price").unwrap();
    assert_eq!(mapping.class, "app::values::Prices");
    assert_eq!(mapping.prefix().unwrap(), "price_");
}

#[test]
fn embed_with_explicit_field_and_prefix() {
    let builder = Builder::new(ClassMetadata::new("Product").handle());
    builder.embed_as("Money", "cost").prefix("cost_amount_");
    builder.embed_as("Money", "margin").no_prefix();
    builder.build_queue().unwrap();

    let metadata = builder.metadata().borrow();
    assert_eq!(
        metadata.embedded("cost").unwrap().prefix().unwrap(),
        "cost_amount_"
    );
    assert_eq!(metadata.embedded("margin").unwrap().prefix(), None);
}
