use codefp::{PipelineConfig, fingerprint_file};

fn defaults() -> PipelineConfig {
    PipelineConfig::default()
}

#[test]
fn fingerprints_equivalent_inputs_match() {
    let cfg = defaults();

    let a = "int sum(int a, int b) {\n    return a + b; // add\n}\n";
    let b = "/* renamed */\r\nint total(int left,int right){return left+right;}";

    let fp_a = fingerprint_file("a.c", a, &cfg).expect("first fingerprint");
    let fp_b = fingerprint_file("b.c", b, &cfg).expect("second fingerprint");

    assert_eq!(fp_a.fingerprint.canonical_text, "int$(int$,int$){return$+$;}");
    assert_eq!(fp_a.fingerprint.canonical_text, fp_b.fingerprint.canonical_text);
    assert_eq!(fp_a.fingerprint.hash, fp_b.fingerprint.hash);
    assert_eq!(fp_a.fingerprint.sha256_hex, fp_b.fingerprint.sha256_hex);
    assert!(fp_a.is_clone_of(&fp_b));
}

#[test]
fn repeated_runs_are_identical() {
    let cfg = defaults();
    let text = "class A { String s = \"x\\ty\"; int n = 0x1F; }";

    let first = fingerprint_file("A.java", text, &cfg).expect("first");
    for _ in 0..5 {
        let again = fingerprint_file("A.java", text, &cfg).expect("again");
        assert_eq!(first, again);
    }
}

#[test]
fn literal_values_do_not_matter() {
    let cfg = defaults();
    let a = fingerprint_file("a.cpp", "f(1, \"a\", 'c', 2.5, true);", &cfg).expect("a");
    let b = fingerprint_file("b.cpp", "f(99, \"zz\\n\", '\\0', 1e9, false);", &cfg).expect("b");
    assert_eq!(a.fingerprint.canonical_text, "$($,$,$,$,$);");
    assert_eq!(a.fingerprint.canonical_text, b.fingerprint.canonical_text);
}

#[test]
fn language_does_not_change_shared_syntax() {
    let cfg = defaults();
    let text = "while (i < n) { i = i + 1; }";
    let c = fingerprint_file("x.c", text, &cfg).expect("c");
    let cpp = fingerprint_file("x.hpp", text, &cfg).expect("cpp");
    let java = fingerprint_file("X.java", text, &cfg).expect("java");
    assert_eq!(c.fingerprint.hash, cpp.fingerprint.hash);
    assert_eq!(c.fingerprint.hash, java.fingerprint.hash);
}

#[test]
fn version_bump_changes_digest_only() {
    let v1 = defaults();
    let mut v2 = defaults();
    v2.canonical.version = 2;

    let a = fingerprint_file("a.c", "x = y;", &v1).expect("v1");
    let b = fingerprint_file("a.c", "x = y;", &v2).expect("v2");
    assert_eq!(a.fingerprint.hash, b.fingerprint.hash);
    assert_ne!(a.fingerprint.sha256_hex, b.fingerprint.sha256_hex);
    assert!(!a.is_clone_of(&b));
}
