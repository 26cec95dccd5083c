// CLI層 - コマンドライン引数の定義
// 引数は持たず、ヘルプとバージョン表示のみを提供する

pub mod args;

// 公開API
pub use args::*;
