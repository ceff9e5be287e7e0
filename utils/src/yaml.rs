use serde::Serialize;

/// Marshals a value to a YAML document without the leading `---` marker, so
/// that the stored manifest is a plain single document.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(value)?;
    let yaml = match yaml.strip_prefix("---\n") {
        Some(stripped) => stripped.to_string(),
        None => yaml,
    };
    if yaml.ends_with('\n') {
        Ok(yaml)
    } else {
        Ok(yaml + "\n")
    }
}

/// Joins single-document manifests into one multi-document stream.
pub fn join_documents(documents: &[String]) -> String {
    documents
        .iter()
        .map(|doc| {
            if doc.ends_with('\n') {
                doc.clone()
            } else {
                format!("{}\n", doc)
            }
        })
        .collect::<Vec<String>>()
        .join("---\n")
}

/// Splits a multi-document YAML stream on `---` separator lines. Documents
/// holding only blank lines or comments are dropped, as are `...` end markers.
pub fn split_documents(contents: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();
    for line in contents.lines() {
        if line.trim_end() == "---" || line.starts_with("--- ") {
            push_document(&mut documents, std::mem::take(&mut current));
            continue;
        }
        if line.trim_end() == "..." {
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    push_document(&mut documents, current);
    documents
}

fn push_document(documents: &mut Vec<String>, document: String) {
    let has_content = document.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if has_content {
        documents.push(document);
    }
}
