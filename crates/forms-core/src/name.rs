//! Form control names derived from field keys
//!
//! Field keys use dots for nesting (`seo.title`); the submitted form needs
//! bracket syntax (`seo[title]`) so the backend can rebuild the structure.

/// Convert a field key into its form control name.
///
/// The rule is applied literally:
/// 1. if the key contains `.`, every `.` becomes `][` and a `]` is appended
///    (`a.b.c` → `a][b][c]`);
/// 2. the first `]` in the result is removed (`a][b][c]` → `a[b][c]`).
///
/// Step 2 also runs for undotted keys, so a key such as `foo]bar` loses its
/// first `]` and becomes `foobar`.
pub fn element_name(key: &str) -> String {
    let mut name = if key.contains('.') {
        let mut expanded = key.replace('.', "][");
        expanded.push(']');
        expanded
    } else {
        key.to_string()
    };

    if let Some(pos) = name.find(']') {
        name.remove(pos);
    }

    name
}
