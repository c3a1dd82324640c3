// Test modules for the translate-serve crate
//
// Each source module has a corresponding unit test module; end-to-end flows
// (pipeline against a stubbed upstream, router against a stubbed pipeline)
// live under integration/.

// Test helper utilities
pub mod helpers;
