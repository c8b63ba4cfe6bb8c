use serde_json::{Value, json};

/// A plain frame with the given children.
pub fn frame(id: &str, name: &str, children: Vec<Value>) -> Value {
    json!({ "id": id, "name": name, "type": "FRAME", "children": children })
}

/// A text node with content and no styling.
pub fn text(id: &str, content: &str) -> Value {
    json!({ "id": id, "name": "Label", "type": "TEXT", "characters": content })
}

/// A solid fill from unit-range channels.
pub fn solid_fill(r: f64, g: f64, b: f64) -> Value {
    json!({ "type": "SOLID", "color": { "r": r, "g": g, "b": b } })
}

/// A card: white vertical auto-layout frame holding a styled title and a
/// fixed body line. Cards with the same title are structurally equal.
pub fn card(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "name": "Card",
        "type": "FRAME",
        "layoutMode": "VERTICAL",
        "itemSpacing": 8,
        "paddingLeft": 16, "paddingRight": 16, "paddingTop": 16, "paddingBottom": 16,
        "fills": [solid_fill(1.0, 1.0, 1.0)],
        "children": [
            {
                "id": format!("{id}:title"),
                "name": "Title",
                "type": "TEXT",
                "characters": title,
                "style": { "fontSize": 16.0, "fontWeight": 700 },
                "fills": [solid_fill(0.1, 0.1, 0.1)],
            },
            {
                "id": format!("{id}:body"),
                "name": "Body",
                "type": "TEXT",
                "characters": "Tap to open",
                "style": { "fontSize": 12.0, "fontWeight": 400 },
                "fills": [solid_fill(0.4, 0.4, 0.4)],
            },
        ],
    })
}

/// A document envelope with a single page holding the given frames.
pub fn document(frames: Vec<Value>) -> Value {
    json!({
        "id": "0:0",
        "name": "Document",
        "type": "DOCUMENT",
        "children": [
            { "id": "0:1", "name": "Page 1", "type": "CANVAS", "children": frames },
        ],
    })
}
