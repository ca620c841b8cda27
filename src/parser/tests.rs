use super::*;

fn collect(text: &str) -> Vec<ContentBlock> {
    MarkdownParser.blocks(text).collect()
}

fn headings(block: &ContentBlock) -> Vec<&str> {
    block.headings.iter().map(String::as_str).collect()
}

// ========================================================================
// HeadingPath Tests
// ========================================================================

#[test]
fn test_heading_path_nesting() {
    let mut path = HeadingPath::new();
    path.enter(1, "A");
    path.enter(2, "B");
    path.enter(3, "C");
    assert_eq!(path.as_slice(), ["A", "B", "C"]);

    path.enter(2, "D");
    assert_eq!(path.as_slice(), ["A", "D"]);

    path.enter(1, "E");
    assert_eq!(path.as_slice(), ["E"]);
}

#[test]
fn test_heading_path_skipped_level() {
    let mut path = HeadingPath::new();
    path.enter(1, "A");
    path.enter(3, "C");
    assert_eq!(path.as_slice(), ["A", "C"]);

    // A level-2 heading replaces the level-3 entry that sits at depth 2
    path.enter(2, "B");
    assert_eq!(path.as_slice(), ["A", "B"]);
}

// ========================================================================
// MarkdownParser Tests
// ========================================================================

#[test]
fn test_sibling_headings_replace_each_other() {
    let blocks = collect("# A\n## B\ntext one\n## C\ntext two\n");

    assert_eq!(blocks.len(), 2);
    assert_eq!(headings(&blocks[0]), ["A", "B"]);
    assert_eq!(blocks[0].text, "text one");
    assert_eq!(headings(&blocks[1]), ["A", "C"]);
    assert_eq!(blocks[1].text, "text two");
}

#[test]
fn test_leading_body_has_no_headings() {
    let blocks = collect("preface line\n# Chapter\nbody");

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].headings.is_empty());
    assert_eq!(blocks[0].text, "preface line");
    assert_eq!(headings(&blocks[1]), ["Chapter"]);
}

#[test]
fn test_headings_only_yields_nothing() {
    let blocks = collect("# A\n## B\n\n### C\n");
    assert!(blocks.is_empty());
}

#[test]
fn test_empty_input() {
    assert!(collect("").is_empty());
    assert!(collect("\n\n   \n").is_empty());
}

#[test]
fn test_blank_lines_become_paragraph_breaks() {
    let blocks = collect("# T\n\nfirst para\nstill first\n\n\n\nsecond para\n\n");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, "first para\nstill first\n\nsecond para");
}

#[test]
fn test_lines_keep_their_indentation() {
    let blocks = collect("  indented line\n\ttabbed line");
    assert_eq!(blocks[0].text, "  indented line\n\ttabbed line");
}

#[test]
fn test_heading_markers_trimmed_from_both_ends() {
    let blocks = collect("# Title##\nbody\n# Using C#\nmore");

    assert_eq!(blocks.len(), 2);
    assert_eq!(headings(&blocks[0]), ["Title"]);
    assert_eq!(headings(&blocks[1]), ["Using C"]);
}

#[test]
fn test_crlf_line_endings() {
    let blocks = collect("# Title\r\n\r\nline one\r\nline two\r\n");

    assert_eq!(blocks.len(), 1);
    assert_eq!(headings(&blocks[0]), ["Title"]);
    assert_eq!(blocks[0].text, "line one\nline two");
}

#[test]
fn test_block_emitted_before_heading_update() {
    let mut blocks = MarkdownParser.blocks("# One\nalpha\n# Two\nbeta");

    let first = blocks.next().unwrap();
    assert_eq!(headings(&first), ["One"]);
    // The heading that closed the first block is already recorded
    assert_eq!(blocks.headings().as_slice(), ["Two"]);

    let second = blocks.next().unwrap();
    assert_eq!(headings(&second), ["Two"]);
    assert!(blocks.next().is_none());
    assert!(blocks.next().is_none());
}

#[test]
fn test_non_blank_lines_preserved_in_order() {
    let doc = "# H\nline 1\n\nline 2\n## Sub\nline 3\n\n\nline 4\n";
    let blocks = collect(doc);

    let lines: Vec<&str> = blocks
        .iter()
        .flat_map(|b| b.text.lines())
        .filter(|l| !l.trim().is_empty())
        .collect();
    assert_eq!(lines, ["line 1", "line 2", "line 3", "line 4"]);
}
