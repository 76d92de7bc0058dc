//! C ABI over `lcg-core`. See `include/lcg.h`.

use lcg_core::Lcg;

#[no_mangle]
pub extern "C" fn lcg_init(seed: u64) -> Lcg {
    lcg_core::init(seed)
}

/// # Safety
///
/// `rng` must be null or point to a valid `struct LCG` not aliased for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn lcg_rand(rng: *mut Lcg) -> u32 {
    match rng.as_mut() {
        Some(rng) => lcg_core::next(rng),
        None => 0,
    }
}

/// # Safety
///
/// `rng` must be null or point to a valid `struct LCG`.
#[no_mangle]
pub unsafe extern "C" fn lcg_state(rng: *const Lcg) -> u64 {
    rng.as_ref().map(Lcg::state).unwrap_or(0)
}
