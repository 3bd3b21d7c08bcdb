/// Unit test target covering the derivation engine and admission gate
/// through the public library interface

mod admission_tests;
mod stats_tests;
