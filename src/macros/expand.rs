/// Expands the kernel templates for one backend.
///
/// This macro is the "Layer 3" of the architecture. It takes a module name,
/// a backend identifier and the target features the backend needs, and
/// generates a module containing the fused dot-product family and the bulk
/// converter for that backend.
#[macro_export]
macro_rules! expand_isa_impls {
    ($module_name:ident, $isa:ident $(, $feat:literal)*) => {
        pub mod $module_name {
            crate::define_shdotxf!($isa $(, $feat)*);
            crate::define_convert_ops!($isa $(, $feat)*);
        }
    };
}
