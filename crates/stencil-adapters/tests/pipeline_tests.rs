//! Generation through the in-memory adapters.

use std::path::Path;

use stencil_adapters::{BasicFormatter, MemoryFilesystem, MemorySource};
use stencil_core::{
    application::{GenerateRequest, GenerateService, ScanService},
    domain::{Conventions, generated_header},
};

const POSTS: &str = "export const Posts = {\n\
    \tslug: 'posts',\n\
    \taccess: { read: () => true },\n\
    \tfields: [\n\
    \t\t{ name: 'title', type: 'text', required: true },\n\
    \t\t{ name: 'slug', type: 'text' },\n\
    \t],\n\
    };\n";

fn service(fs: &MemoryFilesystem) -> GenerateService {
    let source = MemorySource::new()
        .with_document("Posts.ts", POSTS)
        .with_document("legacy/Posts.ts", "slug: 'posts', fields: []")
        .with_document("index.ts", "export * from './Posts';");

    GenerateService::new(
        ScanService::new(Box::new(source), Conventions::default()),
        Box::new(fs.clone()),
        Box::new(BasicFormatter::new()),
    )
}

#[test]
fn generates_into_memory_and_cleans_stale_routes() {
    let stale = format!("{}\nexport default function Old() {{}}\n", generated_header(None));
    let fs = MemoryFilesystem::new()
        .with_file("/site/app/old/page.tsx", stale)
        .with_file("/site/app/about/page.tsx", "export default function About() {}\n");

    let summary = service(&fs)
        .generate(&GenerateRequest::new("/site/gen", "/site/app"))
        .unwrap();

    assert_eq!(summary.schemas, ["posts"]);
    assert_eq!(summary.duplicates, ["legacy/Posts.ts"]);
    assert_eq!(summary.skipped, ["index.ts"]);
    assert_eq!(summary.written.len(), 4);
    assert_eq!(summary.removed, [Path::new("/site/app/old/page.tsx")]);

    assert!(fs.read_file(Path::new("/site/app/old/page.tsx")).is_none());
    assert!(fs.read_file(Path::new("/site/app/about/page.tsx")).is_some());

    let types = fs.read_file(Path::new("/site/gen/types.ts")).unwrap();
    assert!(types.contains("export interface Post {\n  id: string;\n  title: string;\n"));
    assert!(!types.contains('\t'));
    assert!(!types.contains("\n\n\n"));

    assert!(
        fs.read_file(Path::new("/site/app/posts/[slug]/page.tsx"))
            .unwrap()
            .contains("// source: Posts.ts")
    );
}

#[test]
fn second_run_changes_nothing() {
    let fs = MemoryFilesystem::new();
    let request = GenerateRequest::new("/site/gen", "/site/app");

    service(&fs).generate(&request).unwrap();
    let before = fs.files();

    let summary = service(&fs).generate(&request).unwrap();
    assert!(summary.written.is_empty());
    assert_eq!(summary.unchanged.len(), 4);
    assert!(summary.removed.is_empty());
    assert_eq!(fs.files(), before);
}

#[test]
fn dry_run_leaves_filesystem_empty() {
    let fs = MemoryFilesystem::new();
    let summary = service(&fs)
        .generate(&GenerateRequest::new("/site/gen", "/site/app").dry_run(true))
        .unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.written.len(), 4);
    assert!(fs.files().is_empty());
}
