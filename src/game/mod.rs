mod grid;
pub use grid::*;
mod game;
pub use game::*;

/// Small maze with two ghosts and two capsules.
pub const SMALL_CLASSIC: &str = r#"
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%o.%........%.o%.%
%.%%.%.%%%%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%
"#;

/// Tiny maze where a shallow search decides between life and death.
pub const MINIMAX_CLASSIC: &str = r#"
%%%%%%%%%
%.P    G%
%G%%%%%.%
%.     .%
%%%%%%%%%
"#;

/// Narrow corridor with a single ghost.
pub const TEST_CLASSIC: &str = r#"
%%%%%
% . %
%.G.%
% . %
%. .%
%   %
%  .%
%   %
%P .%
%%%%%
"#;
