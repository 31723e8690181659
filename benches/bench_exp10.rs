use criterion::Criterion;
use quadmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, widen};

fn bench_exp10(c: &mut Criterion) {
    let inputs = widen(&[-4900.0, -10.0, -1.0, -1e-6, 0.0, 1e-6, 1.0, 2.0, 10.0, 100.0, 4900.0]);
    let common = gen_range(1024, -5.0, 5.0, 0x1601);
    let wide = gen_range(1024, -4900.0, 4900.0, 0x1602);

    let mut group = c.benchmark_group("exp10/smoke");
    bench_inputs(&mut group, &inputs, math::exp10, |x: f64| 10f64.powf(x));
    group.finish();

    let mut group = c.benchmark_group("exp10/common");
    bench_inputs(&mut group, &common, math::exp10, |x: f64| 10f64.powf(x));
    #[cfg(feature = "mpfr")]
    bench_util::bench_mpfr(&mut group, &common, |v| {
        v.exp10_mut();
    });
    group.finish();

    let mut group = c.benchmark_group("exp10/wide");
    bench_inputs(&mut group, &wide, math::exp10, |x: f64| 10f64.powf(x));
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp10(&mut c);
    c.final_summary();
}
