use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ibancheck::{normalize, validate};

fn bench_validate_shortest(c: &mut Criterion) {
    c.bench_function("validate_no_15_chars", |b| {
        b.iter(|| black_box(validate(black_box("NO9386011117947"))));
    });
}

fn bench_validate_longest(c: &mut Criterion) {
    c.bench_function("validate_mt_31_chars", |b| {
        b.iter(|| black_box(validate(black_box("MT84MALT011000012345MTLCAST001S"))));
    });
}

fn bench_validate_letter_heavy(c: &mut Criterion) {
    // Letters expand to two decimal digits each.
    c.bench_function("validate_qa_letter_heavy", |b| {
        b.iter(|| black_box(validate(black_box("QA58DOHB00001234567890ABCDEFG"))));
    });
}

fn bench_validate_rejected(c: &mut Criterion) {
    c.bench_function("validate_bad_check_digits", |b| {
        b.iter(|| black_box(validate(black_box("DE44500105175407324932"))));
    });
}

fn bench_validate_printed_form(c: &mut Criterion) {
    c.bench_function("validate_printed_form", |b| {
        b.iter(|| black_box(validate(black_box("GB29 NWBK 6016 1331 9268 19"))));
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_printed_form", |b| {
        b.iter(|| black_box(normalize(black_box("de44 5001-0517-5407-3249-31"))));
    });
}

criterion_group!(
    benches,
    bench_validate_shortest,
    bench_validate_longest,
    bench_validate_letter_heavy,
    bench_validate_rejected,
    bench_validate_printed_form,
    bench_normalize,
);
criterion_main!(benches);
