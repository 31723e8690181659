use criterion::Criterion;
use quadmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, widen};

fn bench_exp2(c: &mut Criterion) {
    let inputs = widen(&[-16000.0, -100.0, -1.0, -1e-6, 0.0, 1e-6, 0.5, 1.0, 10.0, 100.0, 16000.0]);
    let common = gen_range(1024, -20.0, 20.0, 0x1301);
    let wide = gen_range(1024, -16000.0, 16000.0, 0x1302);

    let mut group = c.benchmark_group("exp2/smoke");
    bench_inputs(&mut group, &inputs, math::exp2, f64::exp2);
    group.finish();

    let mut group = c.benchmark_group("exp2/common");
    bench_inputs(&mut group, &common, math::exp2, f64::exp2);
    #[cfg(feature = "mpfr")]
    bench_util::bench_mpfr(&mut group, &common, |v| {
        v.exp2_mut();
    });
    group.finish();

    let mut group = c.benchmark_group("exp2/wide");
    bench_inputs(&mut group, &wide, math::exp2, f64::exp2);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp2(&mut c);
    c.final_summary();
}
