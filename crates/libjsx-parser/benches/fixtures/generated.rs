use std::fmt::Write;

/// Generates `depth` nested `<div>` elements, each carrying a `depth`
/// attribute, around a single expression container.
pub fn deeply_nested_elements(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 40);
    for level in 0..depth {
        let indent = "  ".repeat(level);
        writeln!(out, "{indent}<div depth={{{level}}}>").unwrap();
    }
    writeln!(out, "{}{{leaf.value}}", "  ".repeat(depth)).unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level);
        writeln!(out, "{indent}</div>").unwrap();
    }
    out
}

/// Generates a `<ul>` with `count` list items mixing text, attributes and
/// expression containers.
pub fn wide_list(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    out.push_str("<ul className=\"list\">\n");
    for i in 0..count {
        writeln!(
            out,
            "  <li key=\"item-{i}\" data-index={{{i}}}>Item {i}: {{items[{i}].label}}</li>",
        )
        .unwrap();
    }
    out.push_str("</ul>\n");
    out
}

/// Generates a self-closing element with `count` attributes of every value
/// form.
pub fn attribute_heavy(count: usize) -> String {
    let mut out = String::with_capacity(count * 40);
    out.push_str("<Widget\n");
    for i in 0..count {
        match i % 4 {
            0 => writeln!(out, "  flag{i}").unwrap(),
            1 => writeln!(out, "  str{i}=\"value \\u{{41}} {i}\"").unwrap(),
            2 => writeln!(out, "  expr{i}={{a{i} + b{i} * {i}}}").unwrap(),
            _ => writeln!(out, "  {{...spread{i}}}").unwrap(),
        }
    }
    out.push_str("/>\n");
    out
}
