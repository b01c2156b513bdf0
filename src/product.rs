//! Product interface shared by the factory samples.

/// Anything a factory can hand out.
pub trait Product {
    fn name(&self) -> &'static str;

    fn usage(&self) -> String {
        format!("Using {}", self.name())
    }
}

/// Declares a unit-struct product whose name is its type name.
macro_rules! concrete_product {
    ($($ty:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $ty;

            impl $crate::product::Product for $ty {
                fn name(&self) -> &'static str {
                    stringify!($ty)
                }
            }
        )+
    };
}

pub(crate) use concrete_product;
