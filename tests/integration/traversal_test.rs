//! Traversal scenarios over real fixture projects

use super::common::{analyze, project, scanned};
use unimported::models::import::ResolvedImport;

#[test]
fn test_two_files_and_a_dependency() {
    let dir = project(&[
        ("package.json", r#"{ "dependencies": { "lodash": "^4.17.21" } }"#),
        ("src/index.js", "import './b';\nimport 'lodash';\n"),
        ("src/b.js", ""),
    ]);

    let analysis = analyze(dir.path());
    let traversal = &analysis.traversal;

    let visited: Vec<_> = traversal.source_files.keys().cloned().collect();
    assert_eq!(visited, vec![scanned(dir.path(), "src/b.js"), scanned(dir.path(), "src/index.js")]);
    assert_eq!(traversal.referenced_packages.iter().collect::<Vec<_>>(), vec!["lodash"]);
    assert!(traversal.unresolved.is_empty());
    assert!(analysis.result.unused.is_empty());
    assert!(analysis.result.clean);
}

#[test]
fn test_missing_import_is_unresolved() {
    let dir = project(&[("package.json", "{}"), ("src/index.js", "import './missing';")]);

    let analysis = analyze(dir.path());

    assert_eq!(analysis.result.unresolved, vec!["./missing"]);
    assert!(!analysis.result.clean);
}

#[test]
fn test_tsconfig_alias_resolves_to_source_file() {
    let dir = project(&[
        ("package.json", "{}"),
        (
            "tsconfig.json",
            r#"{
                // JSONC is accepted
                "compilerOptions": { "baseUrl": ".", "paths": { "@/*": ["src/*"], } }
            }"#,
        ),
        ("src/index.ts", "import { x } from '@/utils/x';\nconsole.log(x);"),
        ("src/utils/x.js", "export const x = 1;"),
    ]);

    let analysis = analyze(dir.path());
    let index = &analysis.traversal.source_files[&scanned(dir.path(), "src/index.ts")];

    assert_eq!(
        index.imports,
        vec![ResolvedImport::SourceFile {
            path: scanned(dir.path(), "src/utils/x.js")
        }]
    );
    assert!(analysis.result.clean);
}

#[test]
fn test_cycles_and_diamonds_visit_each_file_once() {
    let dir = project(&[
        ("package.json", "{}"),
        ("src/index.js", "import './a';\nimport './b';"),
        ("src/a.js", "import './shared';\nimport './index';"),
        ("src/b.js", "const s = require('./shared');"),
        ("src/shared.js", "export * from './a';"),
    ]);

    let analysis = analyze(dir.path());

    assert_eq!(analysis.traversal.source_files.len(), 4);
    assert!(analysis.result.clean);
}

#[test]
fn test_dependency_wins_over_same_named_file() {
    let dir = project(&[
        ("package.json", r#"{ "dependencies": { "utils": "1.0.0" } }"#),
        ("src/index.js", "import 'utils';"),
        ("src/utils.js", ""),
    ]);

    let analysis = analyze(dir.path());
    let index = &analysis.traversal.source_files[&scanned(dir.path(), "src/index.js")];

    assert_eq!(
        index.imports,
        vec![ResolvedImport::Package {
            declared_name: "utils".to_string()
        }]
    );
    assert_eq!(analysis.result.unimported, vec!["src/utils.js"]);
}

#[test]
fn test_vue_component_scripts_and_styles() {
    let dir = project(&[
        ("package.json", r#"{ "dependencies": { "vue": "3" } }"#),
        ("src/main.js", "import App from './App.vue';"),
        (
            "src/App.vue",
            r#"<template><div class="app"><Logo /></div></template>
<script setup lang="ts">
import { ref } from 'vue';
import Logo from './components/Logo.vue';
const count = ref(0);
</script>
<style lang="scss">
$accent: #42b883;
.app { color: $accent; }
</style>
"#,
        ),
        ("src/components/Logo.vue", "<template><img src=\"../assets/logo.svg\"></template>\n<script>\nimport logo from '../assets/logo.svg';\nexport default { data: () => ({ logo }) };\n</script>\n"),
        ("src/assets/logo.svg", "<svg/>"),
    ]);

    let analysis = analyze(dir.path());
    let traversal = &analysis.traversal;

    assert!(traversal.source_files.contains_key(&scanned(dir.path(), "src/components/Logo.vue")));
    assert!(traversal.static_files.contains(&scanned(dir.path(), "src/assets/logo.svg")));
    assert!(traversal.referenced_packages.contains("vue"));
    assert!(analysis.result.clean, "unexpected findings: {:?}", analysis.result);
}

#[test]
fn test_flow_pragma_files_parse() {
    let dir = project(&[
        ("package.json", "{}"),
        ("src/index.js", "// @flow\nimport type { User } from './types';\nimport { greet } from './greet';\nconst u: User = { name: 'a' };\ngreet(u);"),
        ("src/types.js", "// @flow\nexport type User = { name: string };"),
        ("src/greet.js", "// @flow\nexport function greet(u: { name: string }): string { return u.name; }"),
    ]);

    let analysis = analyze(dir.path());

    assert_eq!(analysis.traversal.source_files.len(), 3);
    assert!(analysis.result.clean);
}

#[test]
fn test_flow_only_syntax_does_not_abort_the_scan() {
    let dir = project(&[
        ("package.json", "{}"),
        ("src/index.js", "// @flow\nimport typeof Shape from './shape';\nimport { make } from './make';\nmake();"),
        ("src/shape.js", "// @flow\nexport type Shape = {| width: number, height: number |};\nexport default {};"),
        ("src/make.js", "/* @flow */\nexport opaque type Token: string = string;\nexport function make() {}"),
    ]);

    let analysis = analyze(dir.path());

    assert_eq!(analysis.traversal.source_files.len(), 3);
    assert!(analysis.result.clean, "unexpected findings: {:?}", analysis.result);
}
