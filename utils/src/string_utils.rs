use heck::ToSnakeCase;

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

// Cannot be raw identifiers.
const RESERVED_PATH_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// PascalCase identifier built from arbitrary text: every run of
/// alphanumerics becomes a part whose first letter is uppercased, the rest is
/// kept as written. Used for generated type names so that names stay stable
/// regardless of acronyms or digits in the input.
pub fn to_type_ident(s: &str) -> String {
    let ident: String = s
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("T{}", ident)
    } else {
        ident
    }
}

/// Snake case name usable as a Rust field identifier.
pub fn to_field_ident(attribute_name: &str) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&attribute_name) {
        format!("{}_", attribute_name)
    } else if RUST_KEYWORDS.contains(&attribute_name) {
        format!("r#{}", attribute_name)
    } else if attribute_name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", attribute_name)
    } else {
        attribute_name.to_string()
    }
}

/// Lowercases and replaces everything that is not alphanumeric with `_`,
/// e.g. `kafka.strimzi.io` becomes `kafka_strimzi_io`.
pub fn sanitize_segment(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub fn indent(s: &str, level: usize) -> String {
    let indent = "    ".repeat(level);
    s.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snake_case_from_json_names() {
        assert_eq!(to_snake_case("topicName"), "topic_name");
        assert_eq!(to_snake_case("cacheSubnetGroupDescription"), "cache_subnet_group_description");
        assert_eq!(to_snake_case("KafkaTopic"), "kafka_topic");
    }

    #[test]
    fn test_type_ident_keeps_acronyms() {
        assert_eq!(to_type_ident("subnetIDs"), "SubnetIDs");
        assert_eq!(
            to_type_ident("kafka_strimzi_io_kafka_topic_v1beta2_manifest"),
            "KafkaStrimziIoKafkaTopicV1beta2Manifest"
        );
        assert_eq!(to_type_ident("x-kubernetes.io"), "XKubernetesIo");
        assert_eq!(to_type_ident("3scale"), "T3scale");
    }

    #[test]
    fn test_field_ident_escapes_keywords() {
        assert_eq!(to_field_ident("type"), "r#type");
        assert_eq!(to_field_ident("self"), "self_");
        assert_eq!(to_field_ident("topic_name"), "topic_name");
        assert_eq!(to_field_ident("3d"), "_3d");
    }

    #[test]
    fn test_sanitize_segment() {
        assert_eq!(sanitize_segment("kafka.strimzi.io"), "kafka_strimzi_io");
        assert_eq!(
            sanitize_segment("elasticache.services.k8s.aws"),
            "elasticache_services_k8s_aws"
        );
        assert_eq!(sanitize_segment("v1Beta2"), "v1beta2");
    }

    #[test]
    fn test_indent_skips_empty_lines() {
        assert_eq!(indent("a\n\nb", 1), "    a\n\n    b");
    }
}
