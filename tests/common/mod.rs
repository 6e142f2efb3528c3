//! Shared fixtures for integration tests.
#![allow(dead_code)]

use gidl::frontend::{ConstValue, NativeType, Package, Shape};
use gidl::testkit::{PackageBuilder, RecordBuilder};

pub const PKG: &str = "example.com/example";

pub fn id(name: &str) -> String {
    format!("{PKG}.{name}")
}

/// A package covering records, enums, unmappable members and generics.
pub fn example_package() -> Package {
    let builder = PackageBuilder::new(PKG);
    let string_enum = builder.type_ref("StringEnum", Shape::Basic);
    let int_enum = builder.type_ref("IntEnum", Shape::Basic);
    let address = builder.type_ref("Address", Shape::Struct);
    let phone_type = builder.type_ref("PhoneType", Shape::Basic);
    let chan_type = builder.type_ref("ChanType", Shape::Chan);

    builder
        .record(
            RecordBuilder::new("Public")
                .field("A", string_enum)
                .field("B", int_enum),
        )
        .named_type("StringEnum", NativeType::basic("string"), Some("StringEnum is a string enum."))
        .constants(
            "StringEnum",
            None,
            vec![
                ("StringEnumA", ConstValue::String("A".into()), Some("A is the first.")),
                ("StringEnumB", ConstValue::String("B".into()), Some("B is the second.")),
                ("StringEnumC", ConstValue::String("C".into()), Some("C is the third.")),
            ],
        )
        .named_type("IntEnum", NativeType::basic("int"), None)
        .constants(
            "IntEnum",
            Some("Integer enum values."),
            vec![
                ("IntEnum0", ConstValue::int(0), None),
                ("IntEnum1", ConstValue::int(1), None),
                ("IntEnum2", ConstValue::int(2), None),
            ],
        )
        .file("person.go")
        .record(
            RecordBuilder::new("Person")
                .doc("Person that exists. It has a name and addresses.")
                .field_with_doc("Name", NativeType::basic("string"), "Name of the person.")
                .field("Age", NativeType::pointer(NativeType::basic("int")))
                .field("Addresses", NativeType::slice(address.clone()))
                .field("Phones", NativeType::map(phone_type, NativeType::basic("string")))
                .field("Scores", NativeType::array(3, NativeType::basic("int")))
                .field("private", NativeType::basic("string"))
                .embedded(address),
        )
        .record(
            RecordBuilder::new("Address")
                .doc("Address of a person.")
                .fields(&["Line1", "Line2"], NativeType::basic("string"))
                .tagged("Postcode", NativeType::basic("string"), r#"json:"postcode""#),
        )
        .named_type("PhoneType", NativeType::basic("string"), Some("PhoneType is the kind of phone."))
        .file("unmappable.go")
        .named_type("ChanType", NativeType::chan(NativeType::basic("string")), None)
        .named_type(
            "FuncType",
            NativeType::Signature {
                params: vec![NativeType::basic("string")],
                results: vec![],
            },
            None,
        )
        .record(
            RecordBuilder::new("Data")
                .field("Keep", NativeType::basic("string"))
                .field("Channel", NativeType::chan(NativeType::basic("string")))
                .field("Named", chan_type),
        )
        .record(
            RecordBuilder::new("DataOfT")
                .type_params(&["T"])
                .field("Field", NativeType::TypeParam { name: "T".into() }),
        )
        .record(RecordBuilder::new("hidden").field("A", NativeType::basic("int")))
        .build()
}
