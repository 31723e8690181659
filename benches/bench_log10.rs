use criterion::Criterion;
use quadmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, widen};

fn bench_log10(c: &mut Criterion) {
    let inputs = widen(&[1e-300, 1e-20, 1e-6, 0.1, 0.5, 0.9, 1.0, 1.000_000_000_001, 2.0, 10.0, 1e5, 1e100]);
    let common = gen_range(1024, 0.5, 4.0, 0x1801);
    let near_one = gen_range(1024, 0.95, 1.05, 0x1802);

    let mut group = c.benchmark_group("log10/smoke");
    bench_inputs(&mut group, &inputs, math::log10, f64::log10);
    group.finish();

    let mut group = c.benchmark_group("log10/common");
    bench_inputs(&mut group, &common, math::log10, f64::log10);
    #[cfg(feature = "mpfr")]
    bench_util::bench_mpfr(&mut group, &common, |v| {
        v.log10_mut();
    });
    group.finish();

    let mut group = c.benchmark_group("log10/near_one");
    bench_inputs(&mut group, &near_one, math::log10, f64::log10);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_log10(&mut c);
    c.final_summary();
}
