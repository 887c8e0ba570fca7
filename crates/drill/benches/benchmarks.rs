use drill::cards::*;
use drill::spots::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        permuting_solved_hand,
        permuting_free_text,
        exhausting_variant_keys,
        grading_submission,
        resolving_villain,
}

const HAND: &str = r#"{
    "id": "0189c1f0-0000-7000-8000-000000000001",
    "street": "flop",
    "hero_position": "BTN",
    "villain_position": "BB",
    "stack_category": "standard",
    "spot_type": "SRP",
    "hero_hand": "AsKd",
    "villain_hand": "QhQc",
    "board": "Ah7c2s",
    "pot": 6.5,
    "tree": {
        "actions": {
            "CHECK": { "frequency": 0.35, "ev": 4.1 },
            "BET_33": { "frequency": 0.50, "ev": 4.4, "next_node": {
                "actions": {
                    "FOLD": { "frequency": 0.30, "ev": 0.0 },
                    "CALL": { "frequency": 0.55, "ev": 2.1 },
                    "RAISE_250": { "frequency": 0.15, "ev": 3.0 }
                }
            }},
            "BET_75": { "frequency": 0.15, "ev": 4.2 }
        }
    },
    "notes": "BTN cbets Ah7c2s against BB, reads as As Kd on the button"
}"#;

fn hand() -> SolvedHand {
    serde_json::from_str(HAND).expect("valid fixture")
}

fn permuting_solved_hand(c: &mut criterion::Criterion) {
    let hand = hand();
    let permutation = Permutation::rotation(2).expect("rotation in range");
    c.bench_function("permute a SolvedHand", |b| {
        b.iter(|| hand.permute(&permutation))
    });
}

fn permuting_free_text(c: &mut criterion::Criterion) {
    let text = String::from("hero holds AsKd on Ah7c2s after BET_75 with AKs and QQ behind");
    let permutation = Permutation::rotation(1).expect("rotation in range");
    c.bench_function("permute free text", |b| b.iter(|| text.permute(&permutation)));
}

fn exhausting_variant_keys(c: &mut criterion::Criterion) {
    c.bench_function("key all 24 Symmetric variants", |b| {
        b.iter(|| {
            Symmetry::Symmetric
                .space()
                .iter()
                .map(VariantKey::from)
                .count()
        })
    });
}

fn grading_submission(c: &mut criterion::Criterion) {
    let hand = hand();
    let rubric = Rubric::default();
    let submission = Submission::try_from("bet 70").expect("valid submission");
    c.bench_function("grade a sized Submission", |b| {
        b.iter(|| rubric.grade(&submission, hand.root(), hand.pot()))
    });
}

fn resolving_villain(c: &mut criterion::Criterion) {
    let hand = hand();
    let node = hand
        .root()
        .follow(&Edge::Bet(33.0))
        .expect("bet continues")
        .clone();
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("resolve a Villain reply", |b| {
        b.iter(|| Villain::resolve(&node, rng))
    });
}
