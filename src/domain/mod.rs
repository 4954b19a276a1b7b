// Domain layer: value objects and ports. No I/O here.

pub mod lotto;
pub mod lotto_number;
pub mod money;
pub mod numbers;
pub mod ports;
pub mod rank;
pub mod splitter;
