// Dynamic programming solution: builds up solutions for sums 1..=amount
// incrementally.
//
// For each sum i, try each coin c as the "last coin" in the solution:
//   - If we can make (i - c), then we can make i using that solution + coin c
//   - tally[i] = min(tally[i], tally[i - c] + 1) for all usable coins c
//
// Filling one sum at a time in ascending order means every i - c we look up
// has already been settled.
//
// The sentinel is amount + 1: no combination for a reachable sum can use
// more than `amount` coins, so the sentinel is strictly larger than any
// real count and survives the +1 in the recurrence without colliding.
pub fn min_coins(coins: &[i64], amount: i64) -> i64 {
    if amount == 0 {
        return 0;
    }
    if coins.is_empty() || amount < 0 {
        return -1;
    }

    // A table of amount + 1 entries has to actually exist: an amount
    // whose sentinel overflows i64 or whose table the allocator cannot
    // hold is infeasible, not fatal.
    let Some(impossible) = amount.checked_add(1) else {
        return -1;
    };
    let target = amount as usize;
    let mut tally: Vec<i64> = Vec::new();
    if tally.try_reserve_exact(target + 1).is_err() {
        return -1;
    }

    // All sums start as impossible until we find a way to construct them.
    // Base case: making sum 0 requires 0 coins (the empty set of coins).
    tally.resize(target + 1, impossible);
    tally[0] = 0;

    for current in 1..=target {
        for &coin in coins {
            // Non-positive denominations can never be part of a minimal
            // positive sum; a negative one would also index past the
            // settled prefix. They are unusable, not an error.
            if coin <= 0 {
                continue;
            }
            let coin = coin as usize;
            if coin <= current {
                let remainder = tally[current - coin];
                if remainder != impossible {
                    let candidate = remainder + 1; // +1 to include this coin
                    if candidate < tally[current] {
                        tally[current] = candidate;
                    }
                }
            }
        }
    }

    match tally[target] {
        n if n != impossible => n,
        _ => -1,
    }
}
