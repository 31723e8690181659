use criterion::Criterion;
use quadmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, widen};

fn bench_log1p(c: &mut Criterion) {
    let inputs = widen(&[-0.9, -0.5, -0.1, -1e-6, 0.0, 1e-6, 0.1, 1.0, 10.0, 1e6]);
    let common = gen_range(1024, -0.9, 10.0, 0x135a);
    let small = gen_range(1024, -0.05, 0.05, 0x135b);

    let mut group = c.benchmark_group("log1p/smoke");
    bench_inputs(&mut group, &inputs, math::log1p, f64::ln_1p);
    group.finish();

    let mut group = c.benchmark_group("log1p/common");
    bench_inputs(&mut group, &common, math::log1p, f64::ln_1p);
    #[cfg(feature = "mpfr")]
    bench_util::bench_mpfr(&mut group, &common, |v| {
        v.ln_1p_mut();
    });
    group.finish();

    let mut group = c.benchmark_group("log1p/small");
    bench_inputs(&mut group, &small, math::log1p, f64::ln_1p);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_log1p(&mut c);
    c.final_summary();
}
