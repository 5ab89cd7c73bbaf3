use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warslot_army::parse_yaml_army;
use warslot_core::{allocate, check_legal, SlotInput};

const ARMY: &str = r#"
units:
  - { type: infantry, size: horde, count: 2 }
  - { type: large_infantry, size: horde, count: 2 }
  - { type: heavy_infantry, size: regiment, count: 3 }
  - { type: hero, count: 4 }
  - { type: war_engine, count: 2 }
  - { type: titan }
"#;

fn sample_inputs() -> Vec<SlotInput> {
    let mut inputs = Vec::with_capacity(6 * 6 * 6);
    for h in 0..6 {
        for l in 0..6 {
            for r in 0..6 {
                inputs.push(SlotInput {
                    horde_count: h,
                    large_inf_count: l,
                    regiment_count: r,
                    hero_count: h + l,
                    war_engine_count: l + r,
                    monster_count: r,
                });
            }
        }
    }
    inputs
}

fn bench_allocate(c: &mut Criterion) {
    let inputs = sample_inputs();
    c.bench_function("allocate_grid", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(allocate(black_box(input)));
            }
        })
    });
    c.bench_function("check_legal_grid", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = black_box(check_legal(black_box(input)));
            }
        })
    });
}

fn bench_army_list(c: &mut Criterion) {
    c.bench_function("parse_tally_allocate", |b| {
        b.iter(|| {
            let army = parse_yaml_army(black_box(ARMY)).unwrap();
            black_box(allocate(&army.tally()))
        })
    });
}

criterion_group!(slots, bench_allocate, bench_army_list);
criterion_main!(slots);
