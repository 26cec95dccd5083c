//! 3種類の呼び出し形態の計測ループ
//!
//! どのループも反復ごとに `FixedVehicle` をヒープに確保し、`engine()` を1回呼んで破棄する。
//! 確保したポインタは `black_box` を通し、確保と解放の対が最適化で消えないようにする。

use crate::core::{LifecycleObserver, LoopKind, LoopMeasurement, Vehicle};
use crate::vehicle::{check_engine, FixedVehicle};
use std::hint::black_box;
use std::time::Instant;

/// `Box<dyn Vehicle>` 経由で呼び出す
///
/// 具象型は1つしか存在しないが、コンパイラはそれを仮定できない。
pub fn dynamic_pointer_loop<O: LifecycleObserver>(observer: &O, iterations: usize) {
    for _ in 0..iterations {
        let vehicle = black_box::<Box<dyn Vehicle + '_>>(FixedVehicle::boxed(observer));
        vehicle.engine();
        drop(vehicle);
    }
}

/// `Box<FixedVehicle>` に対して直接呼び出す（最良ケースの基準値）
pub fn direct_type_loop<O: LifecycleObserver>(observer: &O, iterations: usize) {
    for _ in 0..iterations {
        let vehicle: Box<FixedVehicle<'_, O>> = black_box(FixedVehicle::boxed(observer));
        vehicle.engine();
        drop(vehicle);
    }
}

/// 具象型で保持し、`check_engine(&dyn Vehicle)` を介して呼び出す
pub fn indirect_call_loop<O: LifecycleObserver>(observer: &O, iterations: usize) {
    for _ in 0..iterations {
        let vehicle: Box<FixedVehicle<'_, O>> = black_box(FixedVehicle::boxed(observer));
        check_engine(&*vehicle);
        drop(vehicle);
    }
}

/// 指定した形態のループを実行し、経過時間を計測する
pub fn time_loop<O: LifecycleObserver>(
    kind: LoopKind,
    observer: &O,
    iterations: usize,
) -> LoopMeasurement {
    let start = Instant::now();
    match kind {
        LoopKind::DynamicPointer => dynamic_pointer_loop(observer, iterations),
        LoopKind::DirectType => direct_type_loop(observer, iterations),
        LoopKind::IndirectCall => indirect_call_loop(observer, iterations),
    }
    let elapsed = start.elapsed();

    LoopMeasurement::new(kind, iterations, elapsed)
}
