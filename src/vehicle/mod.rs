//! 封印された唯一の車両実装
//!
//! `Vehicle` は封印トレイトのため、実装はこのモジュールの `FixedVehicle` のみ。
//! 具象構造体は派生できないので、静的型が `FixedVehicle` であれば
//! コンパイラは `engine()` の呼び出し先を確定できる。

use crate::core::traits::sealed::Sealed;
use crate::core::{LifecycleObserver, Vehicle};

/// `Vehicle` の封印済み具象型
///
/// 生成・`engine()`・破棄のたびにオブザーバへ通知する。
/// オブザーバは参照で保持するため、インスタンスは常にヒープ確保を伴う大きさになる。
#[derive(Debug)]
pub struct FixedVehicle<'a, O: LifecycleObserver> {
    observer: &'a O,
}

impl<'a, O: LifecycleObserver> FixedVehicle<'a, O> {
    pub fn new(observer: &'a O) -> Self {
        observer.on_constructed();
        Self { observer }
    }

    /// ヒープ上に生成する
    pub fn boxed(observer: &'a O) -> Box<Self> {
        Box::new(Self::new(observer))
    }
}

impl<O: LifecycleObserver> Sealed for FixedVehicle<'_, O> {}

impl<O: LifecycleObserver> Vehicle for FixedVehicle<'_, O> {
    #[inline]
    fn engine(&self) {
        self.observer.on_engine();
    }
}

impl<O: LifecycleObserver> Drop for FixedVehicle<'_, O> {
    fn drop(&mut self) {
        self.observer.on_destroyed();
    }
}

/// トレイトオブジェクトとして受け取った車両のエンジンを確認する
///
/// 呼び出し元でインライン化されない限り、vtable 経由の呼び出しになる。
pub fn check_engine(vehicle: &dyn Vehicle) {
    vehicle.engine();
}
