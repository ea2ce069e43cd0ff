/// Benchmarks for the gclint checker.
///
/// Run with: `cargo bench`
///
/// Measures one traversal over synthetic units of increasing size, with the
/// assignment check off and on.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gclint::application::Analyzer;
use gclint::domain::ast::{BinaryOp, NodeKind};
use gclint::domain::classify::IR_PKG_PATH;
use gclint::domain::config::AnalyzerConfig;
use gclint::domain::types::{Object, ObjectKind, Signature, Type, TypeAndValue};
use gclint::domain::unit::{Unit, UnitBuilder};

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Data Generators
// ═══════════════════════════════════════════════════════════════════════════

/// A file of `funcs` functions, each with `stmts` statements alternating
/// between a node comparison and a name-to-node assignment.
fn create_synthetic_unit(funcs: usize, stmts: usize) -> Unit {
    let node = Type::named(IR_PKG_PATH, "Node");
    let name_ptr = Type::pointer(Type::named(IR_PKG_PATH, "Name"));
    let mut b = UnitBuilder::new("bench.go");
    let mut decls = Vec::with_capacity(funcs);

    for f in 0..funcs {
        let mut body = Vec::with_capacity(stmts);
        for s in 0..stmts {
            let x = b.push_typed(NodeKind::Ident { name: format!("x{}", s) }, TypeAndValue::value(node.clone()));
            let stmt = if s % 2 == 0 {
                let y = b.push_typed(NodeKind::Ident { name: "y".to_string() }, TypeAndValue::value(node.clone()));
                let cmp = b.push(NodeKind::BinaryExpr { op: BinaryOp::Eql, x, y });
                b.push(NodeKind::ExprStmt { x: cmp })
            } else {
                let n = b.push_typed(NodeKind::Ident { name: "n".to_string() }, TypeAndValue::value(name_ptr.clone()));
                b.push(NodeKind::AssignStmt { lhs: vec![x], define: false, rhs: vec![n] })
            };
            body.push(stmt);
        }
        let block = b.push(NodeKind::BlockStmt { stmts: body });
        let ident = b.push(NodeKind::Ident { name: format!("f{}", f) });
        b.set_def(
            ident,
            Object::new(ObjectKind::Func, Some("bench"), &format!("f{}", f), Some(Type::Signature(Signature::default()))),
        );
        let ty = b.push(NodeKind::FuncType { params: vec![], results: vec![] });
        decls.push(b.push(NodeKind::FuncDecl { recv: None, name: ident, ty, body: Some(block) }));
    }

    let root = b.push(NodeKind::File { decls });
    b.finish(root).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Traversal Benchmarks
// ═══════════════════════════════════════════════════════════════════════════

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze/unit");

    for funcs in [10, 100, 1000].iter() {
        let unit = create_synthetic_unit(*funcs, 20);
        group.throughput(Throughput::Elements(unit.tree.len() as u64));

        for assign in [false, true] {
            let config = AnalyzerConfig::with_assign(assign);
            let label = if assign { "assign" } else { "default" };
            group.bench_with_input(BenchmarkId::new(label, funcs), &unit, |b, unit| {
                let analyzer = Analyzer::new(&config);
                b.iter(|| analyzer.analyze(black_box(unit)).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
