// src/domain/redemption.rs

/// Result of trying to redeem an item with points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redemption {
    Redeemed { remaining: u32 },
    Insufficient { shortfall: u32 },
}

/// Points still missing to afford `price`, if any.
pub fn shortfall(balance: u32, price: u32) -> Option<u32> {
    (balance < price).then(|| price - balance)
}

/// Deducts `price` from `balance` when it is covered. On a shortfall the
/// balance is left unchanged.
pub fn redeem(balance: &mut u32, price: u32) -> Redemption {
    match shortfall(*balance, price) {
        Some(shortfall) => Redemption::Insufficient { shortfall },
        None => {
            *balance -= price;
            Redemption::Redeemed {
                remaining: *balance,
            }
        }
    }
}
