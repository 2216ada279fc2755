use serde_json::Value;

/// Content block types that carry model reasoning.
const REASONING_TYPES: [&str; 2] = ["thinking", "redacted_thinking"];

/// Remove reasoning content from a parsed transcript record.
///
/// Deletes the top-level `thinking` field and filters out entries typed
/// `thinking` or `redacted_thinking` from the `message.content` array.
/// Returns `true` when anything was removed.
///
/// Records with any other shape (no `message`, `message` not an object,
/// `content` not an array, non-object root) are left untouched; this
/// function cannot fail.
pub fn strip_thinking(record: &mut Value) -> bool {
    let Some(obj) = record.as_object_mut() else {
        return false;
    };

    let mut modified = obj.remove("thinking").is_some();

    if let Some(content) = obj
        .get_mut("message")
        .and_then(|message| message.as_object_mut())
        .and_then(|message| message.get_mut("content"))
        .and_then(|content| content.as_array_mut())
    {
        let original_len = content.len();
        content.retain(|block| !is_reasoning_block(block));
        if content.len() != original_len {
            modified = true;
        }
    }

    modified
}

/// True for content entries that are objects carrying a reasoning `type`.
fn is_reasoning_block(block: &Value) -> bool {
    block
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|kind| REASONING_TYPES.contains(&kind))
}
