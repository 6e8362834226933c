//! End-to-end document processing tests.

use serial_test::serial;

use stenocss::{
    set_color_mode_detector, ColorMode, Document, Element, EngineConfig, FsLoader, InitialTheme,
    MemoryLoader, StyleEngine,
};

#[test]
fn test_document_lifecycle_with_inline_and_external_sources() {
    let engine = StyleEngine::with_defaults();

    let mut loader = MemoryLoader::new();
    loader.insert("site.sncss", ".nav { bg: --background-color; align: center; }");

    let mut doc = Document::new();
    doc.add_link("site.sncss");
    doc.add_link("vendor.css");
    doc.add_inline("stenocss", ".box { bg: primary; padding: 20px; }");

    engine.process_document(&mut doc, &loader);

    // One stylesheet per source; the non-matching link is ignored.
    assert_eq!(
        doc.stylesheets(),
        &[
            ".nav { background-color: #fff; text-align: center; }".to_string(),
            ".box { background-color: var(--primary-color); padding: 20px; }".to_string(),
        ]
    );

    // The inline element was consumed, and the theme landed on the root.
    assert_eq!(doc.inline_len(), 0);
    assert_eq!(doc.root_property("--primary-color"), Some("#3498db"));
    assert_eq!(doc.root_property("--text-color"), Some("#333"));
}

#[test]
fn test_load_failure_is_isolated_and_inline_still_processed() {
    let engine = StyleEngine::with_defaults();

    let mut loader = MemoryLoader::new();
    loader.insert("good.sncss", ".a { color: red; }");

    let mut doc = Document::new();
    doc.add_link("missing.sncss");
    doc.add_link("good.sncss");
    doc.add_inline("stenocss", ".b { margin: 0; }");

    engine.process_document(&mut doc, &loader);

    assert_eq!(
        doc.stylesheets(),
        &[".a { color: red; }".to_string(), ".b { margin: 0; }".to_string()]
    );
}

#[test]
fn test_theme_switch_updates_live_references_only() {
    let mut engine = StyleEngine::with_defaults();
    let mut doc = Document::new();
    doc.add_inline(
        "stenocss",
        ".box { bg: primary; color: --text-color; }",
    );

    engine.process_document(&mut doc, &MemoryLoader::new());

    let injected = doc.stylesheets()[0].clone();
    assert_eq!(
        injected,
        ".box { background-color: var(--primary-color); color: #333; }"
    );

    engine.set_theme("dark", &mut doc);

    // Root properties moved to the dark palette...
    assert_eq!(doc.root_property("--primary-color"), Some("#2c3e50"));
    assert_eq!(doc.root_property("--text-color"), Some("#ddd"));
    // ...the stylesheet text did not: the var reference now resolves to the
    // new color through the root, the substituted literal stays stale.
    assert_eq!(doc.stylesheets()[0], injected);
}

#[test]
fn test_breakpoint_registration_end_to_end() {
    let mut engine = StyleEngine::with_defaults();
    engine.add_breakpoint("foo", "500px");

    assert_eq!(
        engine.expand(".box { foo: none; }"),
        ".box { @media (max-width: 500px): none; }"
    );
}

#[test]
fn test_custom_styles_accumulate_across_calls() {
    let mut engine = StyleEngine::with_defaults();
    let mut doc = Document::new();

    engine.add_custom_style(".my-class", &[("bg", "primary")], &mut doc);
    engine.add_custom_style(".other", &[("padding", "20px")], &mut doc);

    // Every addition appends a full re-render; earlier ones stay behind.
    assert_eq!(doc.stylesheets().len(), 2);
    assert_eq!(
        doc.stylesheets()[1],
        ".my-class { background-color: var(--primary-color); }\n.other { padding: 20px; }"
    );
}

#[test]
fn test_minimal_profile_matches_reduced_variant() {
    let mut engine = StyleEngine::new(EngineConfig::minimal());

    let mut loader = MemoryLoader::new();
    loader.insert("site.sncss", ".a { color: red; }");

    let mut doc = Document::new();
    doc.add_link("site.sncss");
    doc.add_inline("stenocss", ".b { margin: 0; }");

    engine.process_document(&mut doc, &loader);
    engine.add_custom_style(".c", &[("color", "blue")], &mut doc);

    // Only the inline element produced output.
    assert_eq!(doc.stylesheets(), &[".b { margin: 0; }".to_string()]);
}

#[test]
fn test_malformed_input_degrades_by_omission() {
    let engine = StyleEngine::with_defaults();
    let mut doc = Document::new();
    doc.add_inline(
        "stenocss",
        "garbage } .ok { color: red; novalue; } { orphan: 1; }",
    );

    engine.process_document(&mut doc, &MemoryLoader::new());

    assert_eq!(doc.stylesheets(), &[".ok { color: red; }".to_string()]);
}

#[test]
fn test_apply_animation_matches_contract() {
    let engine = StyleEngine::with_defaults();

    let mut element = Element::new();
    engine.apply_animation(Some(&mut element), "fade-in", None);
    assert_eq!(element.style("animation"), Some("fade-in 1s ease-in-out"));

    // Absent element: no-op, no panic.
    engine.apply_animation(None, "fade-in", None);
}

#[test]
fn test_fs_loader_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("site.sncss"), ".a { radius: 5px; }").unwrap();

    let engine = StyleEngine::with_defaults();
    let mut doc = Document::new();
    doc.add_link("site.sncss");

    engine.process_document(&mut doc, &FsLoader::new(dir.path()));

    assert_eq!(doc.stylesheets(), &[".a { border-radius: 5px; }".to_string()]);
}

#[test]
#[serial]
fn test_detected_initial_theme_selects_dark() {
    set_color_mode_detector(|| ColorMode::Dark);

    let engine = StyleEngine::new(EngineConfig {
        initial_theme: InitialTheme::Detect,
        ..EngineConfig::default()
    });
    assert_eq!(engine.theme(), "dark");

    set_color_mode_detector(|| ColorMode::Light);
    let engine = StyleEngine::new(EngineConfig {
        initial_theme: InitialTheme::Detect,
        ..EngineConfig::default()
    });
    assert_eq!(engine.theme(), "light");
}

#[test]
fn test_custom_tag_and_extension_config() {
    let engine = StyleEngine::new(EngineConfig {
        element_tag: "shortstyle".to_string(),
        file_extension: ".short".to_string(),
        ..EngineConfig::default()
    });

    let mut loader = MemoryLoader::new();
    loader.insert("site.short", ".a { color: red; }");

    let mut doc = Document::new();
    doc.add_link("site.short");
    doc.add_inline("stenocss", "ignored { color: blue; }");
    doc.add_inline("shortstyle", ".b { margin: 0; }");

    engine.process_document(&mut doc, &loader);

    assert_eq!(
        doc.stylesheets(),
        &[".a { color: red; }".to_string(), ".b { margin: 0; }".to_string()]
    );
    // The foreign tag is left in the document.
    assert_eq!(doc.inline_len(), 1);
}
