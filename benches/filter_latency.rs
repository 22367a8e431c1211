use criterion::{black_box, criterion_group, criterion_main, Criterion};

use factgate::domain::{Fact, RuleAction, RuleDef};
use factgate::rules::{Rule, RuleSet};

fn compile_rule(action: RuleAction, trait_name: &str, match_expr: &str) -> Rule {
    Rule::compile(&RuleDef {
        action,
        trait_name: trait_name.to_string(),
        match_expr: match_expr.to_string(),
    })
    .unwrap()
}

fn scope_ruleset() -> RuleSet {
    RuleSet::new(vec![
        compile_rule(RuleAction::Deny, "remote.host.ip", "10.0.0.0/16"),
        compile_rule(RuleAction::Allow, "remote.host.ip", "10.0.1.0/24"),
        compile_rule(RuleAction::Deny, "remote.host.ip", "10.0.1.13"),
        compile_rule(RuleAction::Deny, "host.file.path", "/tmp/"),
        compile_rule(RuleAction::Deny, "host.file.path", r"^/home/.*/\.ssh/"),
        compile_rule(RuleAction::Deny, "remote.host.fqdn", ".*"),
        compile_rule(RuleAction::Allow, "remote.host.fqdn", r"^lab\."),
    ])
}

fn bench_address_verdict(c: &mut Criterion) {
    let ruleset = scope_ruleset();
    let fact = Fact::new("remote.host.ip", "10.0.1.200");

    c.bench_function("is_fact_allowed_address", |b| {
        b.iter(|| ruleset.is_fact_allowed(black_box(&fact)))
    });
}

fn bench_pattern_verdict(c: &mut Criterion) {
    let ruleset = scope_ruleset();
    let fact = Fact::new("host.file.path", "/home/operator/.ssh/id_ed25519");

    c.bench_function("is_fact_allowed_pattern", |b| {
        b.iter(|| ruleset.is_fact_allowed(black_box(&fact)))
    });
}

fn bench_no_applicable_rules(c: &mut Criterion) {
    let ruleset = scope_ruleset();
    let fact = Fact::new("host.user.name", "operator");

    c.bench_function("is_fact_allowed_no_applicable", |b| {
        b.iter(|| ruleset.is_fact_allowed(black_box(&fact)))
    });
}

fn bench_apply_rules_bulk(c: &mut Criterion) {
    let ruleset = scope_ruleset();

    let mut facts = Vec::with_capacity(10_000);
    for i in 0..10_000u32 {
        match i % 3 {
            0 => facts.push(Fact::new(
                "remote.host.ip",
                format!("10.{}.{}.{}", i % 2, (i / 256) % 256, i % 256),
            )),
            1 => facts.push(Fact::new("host.file.path", format!("/var/cache/item-{i}"))),
            _ => facts.push(Fact::new("remote.host.fqdn", format!("host-{i}.lab.local"))),
        }
    }

    c.bench_function("apply_rules_10k", |b| {
        b.iter(|| ruleset.apply_rules(black_box(facts.clone())))
    });
}

criterion_group!(
    benches,
    bench_address_verdict,
    bench_pattern_verdict,
    bench_no_applicable_rules,
    bench_apply_rules_bulk,
);

criterion_main!(benches);
