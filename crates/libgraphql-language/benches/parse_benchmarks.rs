mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_language::GraphQLLexer;
use libgraphql_language::ParseOptions;
use libgraphql_language::ast::Kind;
use libgraphql_language::ast::Node;
use libgraphql_language::parse;
use libgraphql_language::print;
use libgraphql_language::visitor::VisitAction;
use libgraphql_language::visitor::VisitorFns;
use libgraphql_language::visitor::visit;

fn inputs() -> Vec<(&'static str, String)> {
    vec![
        ("simple_query", fixtures::SIMPLE_QUERY.to_string()),
        ("complex_query", fixtures::COMPLEX_QUERY.to_string()),
        ("starwars_schema", fixtures::STARWARS_SCHEMA.to_string()),
        ("schema_100 (synthetic)", fixtures::schemas::synthetic_schema(100)),
        ("schema_1000 (synthetic)", fixtures::schemas::synthetic_schema(1000)),
        ("nested_depth_30", fixtures::operations::nested_query(30)),
        ("operation_set_50", fixtures::operations::operation_set(50)),
    ]
}

fn parsed(input: &str) -> Node {
    parse(input, ParseOptions::default())
        .expect("benchmark fixture should parse")
        .into()
}

// ─── Group 1: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    for (label, input) in inputs() {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(
                        GraphQLLexer::new(input.as_str()).into_tokens(),
                    )
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Parsing ────────────────────────────────────

fn parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (label, input) in inputs() {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("located", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(parse(input.as_str(), ParseOptions::default()))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("no_location", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(parse(
                        input.as_str(),
                        ParseOptions::default().no_location(true),
                    ))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 3: Visiting ───────────────────────────────────

fn visiting(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit");

    for (label, input) in inputs() {
        let root = parsed(&input);

        group.bench_with_input(
            BenchmarkId::new("read_only", label),
            &root,
            |b, root| {
                b.iter(|| {
                    let mut nodes = 0usize;
                    let mut visitor = VisitorFns::new().on_enter_any(|_, _| {
                        nodes += 1;
                        Ok(VisitAction::Continue)
                    });
                    let _ = black_box(visit(root.clone(), &mut visitor));
                    drop(visitor);
                    black_box(nodes)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("drop_directives", label),
            &root,
            |b, root| {
                b.iter(|| {
                    let mut visitor = VisitorFns::new()
                        .on_enter(Kind::Directive, |_, _| Ok(VisitAction::Remove));
                    black_box(visit(root.clone(), &mut visitor))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 4: Printing ───────────────────────────────────

fn printing(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");

    for (label, input) in inputs() {
        let root = parsed(&input);
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &root,
            |b, root| b.iter(|| black_box(print(root.clone()))),
        );
    }

    group.finish();
}

// ─── Group 5: Cross-Parser Comparison ────────────────────

fn compare_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_parse");

    let schemas: &[(&str, String)] = &[
        ("starwars", fixtures::STARWARS_SCHEMA.to_string()),
        ("schema_1000", fixtures::schemas::synthetic_schema(1000)),
    ];
    for (label, input) in schemas {
        group.bench_with_input(
            BenchmarkId::new("libgraphql_language", label),
            input,
            |b, input| {
                b.iter(|| {
                    black_box(parse(input.as_str(), ParseOptions::default()))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("graphql_parser", label),
            input,
            |b, input| {
                b.iter(|| {
                    black_box(
                        graphql_parser::schema::parse_schema::<String>(input),
                    )
                })
            },
        );
    }

    let queries: &[(&str, &str)] = &[
        ("simple", fixtures::SIMPLE_QUERY),
        ("complex", fixtures::COMPLEX_QUERY),
    ];
    for &(label, input) in queries {
        group.bench_with_input(
            BenchmarkId::new("libgraphql_language", label),
            &input,
            |b, input| {
                b.iter(|| black_box(parse(*input, ParseOptions::default())))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("graphql_parser", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(graphql_parser::query::parse_query::<String>(input))
                })
            },
        );
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    lexer,
    parsing,
    visiting,
    printing,
    compare_parse,
);
criterion_main!(benches);
