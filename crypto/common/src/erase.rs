//! Best-effort wiping of key-derived material the optimizer cannot elide.

#![allow(clippy::module_name_repetitions)]

#[inline(always)]
fn atomic_fence() {
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

#[inline(always)]
fn volatile_write<T: Copy + Sized>(src: T, dst: &mut T) {
    unsafe { core::ptr::write_volatile(dst, src) }
}

pub trait Erase {
    fn erase(&mut self);
}

trait DefaultIsErased: Copy + Default + Sized {}

impl<E: DefaultIsErased> Erase for E {
    fn erase(&mut self) {
        volatile_write(E::default(), self);
        atomic_fence();
    }
}

macro_rules! impl_default_is_erased {
    ($($t:ty),*) => {
        $(
            impl DefaultIsErased for $t {}
        )*
    };
}

impl_default_is_erased! {
    bool, u8, u16, u32, u64, u128, usize
}

impl<E: Erase, const N: usize> Erase for [E; N] {
    fn erase(&mut self) {
        for elem in self {
            elem.erase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Erase;

    #[test]
    fn arrays_wipe_to_default() {
        let mut pad = [0x5c_u8; 64];
        pad.erase();
        assert_eq!(pad, [0; 64]);
        let mut len = u128::MAX;
        len.erase();
        assert_eq!(len, 0);
    }
}
