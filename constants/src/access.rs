/// Code that unlocks the showcase overlay.
///
/// Compared as plain text on the client and shipped inside the binary. This
/// keeps casual visitors out of an unfinished page; it does not protect anything.
pub const UNLOCK_SECRET: &str = "cabal";
