pub mod fixtures;

use canopy::RawNode;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Parses a JSON fixture into a raw node.
pub fn raw(value: Value) -> Result<RawNode, Box<dyn std::error::Error>> {
    Ok(RawNode::from_value(value)?)
}
