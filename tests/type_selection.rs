use pretty_assertions::assert_eq;
use schema_typegen::{
    CompositeRules, GenError, GenResult, GenerationConfig, OutputContainer, RuleFactory,
    ScalarKind, SchemaContext, TypeRef, TypeRule,
};
use serde_json::{json, Value};

fn select(node: Value, config: GenerationConfig) -> TypeRef {
    let factory = RuleFactory::new(config);
    let mut container = OutputContainer::new("com.example.model");
    let context = SchemaContext::new(node.clone());
    factory
        .type_rule()
        .apply("field", &node, &mut container, &context)
        .unwrap()
}

#[test]
fn test_scalar_selection_with_defaults() {
    let cases = vec![
        (json!({"type": "string"}), "String"),
        (json!({"type": "number"}), "Double"),
        (json!({"type": "integer"}), "Integer"),
        (json!({"type": "short"}), "Short"),
        (json!({"type": "byte"}), "Byte"),
        (json!({"type": "boolean"}), "Boolean"),
        (json!({"type": "null"}), "Object"),
        (json!({}), "Object"),
    ];

    for (node, expected) in cases {
        let rendered = select(node.clone(), GenerationConfig::default()).to_string();
        assert_eq!(rendered, expected.to_string(), "node {}", node);
    }
}

#[test]
fn test_primitive_float_scenario() {
    // {"type":"number"} with single precision and primitives preferred
    let config = GenerationConfig {
        use_primitives: true,
        use_double_numbers: false,
        ..Default::default()
    };
    let result = select(json!({"type": "number"}), config);
    assert_eq!(result, TypeRef::Primitive(ScalarKind::Float));
}

#[test]
fn test_date_time_scenario() {
    let result = select(
        json!({"type": "string", "format": "date-time"}),
        GenerationConfig::default(),
    );
    assert_eq!(result, TypeRef::Named("java.util.Date".to_string()));
}

#[test]
fn test_untyped_object_scenario() {
    // No "type" key, but properties present: the object delegate decides
    let node = json!({"properties": {"a": {"type": "string"}}});
    let result = select(node, GenerationConfig::default());
    assert_eq!(
        result,
        TypeRef::Generated {
            package: "com.example.model".to_string(),
            name: "Field".to_string(),
        }
    );
}

#[test]
fn test_multi_type_schema_honours_first_candidate() {
    let result = select(
        json!({"type": ["integer", "string"]}),
        GenerationConfig::default(),
    );
    assert_eq!(result, TypeRef::Boxed(ScalarKind::Integer));
}

#[test]
fn test_config_loaded_from_yaml_drives_selection() {
    let config = GenerationConfig::from_yaml_str(
        "usePrimitives: true\nuseLongIntegers: true\nuseDoubleNumbers: true",
    )
    .unwrap();

    let result = select(json!({"type": "integer"}), config);
    assert_eq!(result, TypeRef::Primitive(ScalarKind::Long));
}

#[test]
fn test_nested_document_generation() {
    // Walk a small document the way the host generator would, one
    // property node at a time
    let document = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "age": {"type": "integer"},
            "address": {"type": "object", "properties": {"street": {"type": "string"}}},
            "nicknames": {"type": "array", "items": {"type": "string"}}
        }
    });

    let factory = RuleFactory::new(GenerationConfig::default());
    let rule = factory.type_rule();
    let mut container = OutputContainer::new("com.example.model");
    let context = SchemaContext::new(document.clone());

    let root = rule
        .apply("person", &document, &mut container, &context)
        .unwrap();
    assert_eq!(root.to_string(), "com.example.model.Person");

    let mut rendered = Vec::new();
    for (name, node) in document["properties"].as_object().unwrap() {
        let type_ref = rule.apply(name, node, &mut container, &context).unwrap();
        rendered.push(format!("{}: {}", name, type_ref));
    }

    assert_eq!(
        rendered,
        vec![
            "name: String".to_string(),
            "age: Integer".to_string(),
            "address: com.example.model.Address".to_string(),
            "nicknames: java.util.List<String>".to_string(),
        ]
    );

    // Person and Address were generated, in encounter order
    let generated: Vec<&str> = container.generated().map(|(name, _)| name).collect();
    assert_eq!(generated, vec!["Person", "Address"]);
}

/// A host delegate set that rejects every composite schema. Used to check
/// that delegate failures propagate through the type rule unchanged.
struct RejectingRules;

impl CompositeRules for RejectingRules {
    fn object(
        &self,
        name: &str,
        _node: &Value,
        _container: &mut OutputContainer,
        _context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        Err(GenError::Rule(format!("object rejected: {}", name)))
    }

    fn array(
        &self,
        name: &str,
        _node: &Value,
        _container: &mut OutputContainer,
        _context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        Err(GenError::Rule(format!("array rejected: {}", name)))
    }

    fn format(
        &self,
        _name: &str,
        _format: &Value,
        current: TypeRef,
        _context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        Ok(current)
    }

    fn media(
        &self,
        _name: &str,
        _media: &Value,
        current: TypeRef,
        _context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        Ok(current)
    }
}

#[test]
fn test_delegate_failures_propagate() {
    let config = GenerationConfig::default();
    let rule = TypeRule::new(&config, &RejectingRules);
    let mut container = OutputContainer::new("");
    let context = SchemaContext::default();

    let err = rule
        .apply("thing", &json!({"type": "object"}), &mut container, &context)
        .unwrap_err();
    assert_eq!(format!("{}", err), "Rule Error: object rejected: thing");

    // Scalars never reach the rejecting delegates
    let ok = rule
        .apply("name", &json!({"type": "string"}), &mut container, &context)
        .unwrap();
    assert_eq!(ok, TypeRef::Str);
}
