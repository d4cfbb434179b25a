/// Implemented by compat wrappers to expose the modular instance they forward to.
pub trait Compat<T: ?Sized> {
    fn delegate(&self) -> &T;
}

pub fn get_compat_delegate<T, C>(service: &C) -> &T
where
    T: ?Sized,
    C: Compat<T>,
{
    service.delegate()
}
