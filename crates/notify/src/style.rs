//! Built-in stylesheet and the style properties the engine writes.

/// Custom property receiving the horizontal `calc()` expression.
pub const LEFT_PROPERTY: &str = "--herald-notify-left";
/// Custom property receiving the vertical `calc()` expression.
pub const TOP_PROPERTY: &str = "--herald-notify-top";
/// Custom property receiving the stacking priority of grouped notifications.
pub const Z_INDEX_PROPERTY: &str = "--herald-notify-z-index";
/// Computed property sampled to decide whether closing is animated.
pub const ANIMATION_DURATION: &str = "animation-duration";
/// Inline property toggled to run or pause the exit animation.
pub const ANIMATION_PLAY_STATE: &str = "animation-play-state";

/// Computed margin properties, clockwise from the top.
pub const MARGIN_PROPERTIES: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];

/// Attribute carrying the semantic role.
pub const ROLE_ATTRIBUTE: &str = "role";
/// Attribute set once a closing condition has been observed.
pub const CLOSING_ATTRIBUTE: &str = "data-closing";

/// Stylesheet injected into every notification's shadow tree.
///
/// The exit animation starts paused and is released by the engine once the
/// notification is closing; `animationend` then completes removal.
pub const DEFAULT_STYLESHEET: &str = r#":host {
  --herald-notify-bg: #f4f6f8;
  --herald-notify-fg: #1d2730;
  --herald-notify-accent: #3d7bd9;
  box-sizing: border-box;
  position: fixed;
  left: var(--herald-notify-left, auto);
  top: var(--herald-notify-top, auto);
  z-index: var(--herald-notify-z-index, 10000);
  width: 320px;
  max-width: calc(100vw - 16px);
  margin: 8px;
  padding: 12px 16px;
  border-left: 4px solid var(--herald-notify-accent);
  border-radius: 4px;
  background: var(--herald-notify-bg);
  color: var(--herald-notify-fg);
  font: 14px/1.4 system-ui, sans-serif;
  box-shadow: 0 2px 8px rgb(0 0 0 / 20%);
  transition: left 150ms ease-out, top 150ms ease-out;
  animation: herald-notify-fade-out 300ms ease-in forwards paused;
}
:host([closeable]) { cursor: pointer; }
:host([type="default"]) { --herald-notify-accent: #8a949e; }
:host([type="success"]) { --herald-notify-accent: #2e9e5b; }
:host([type="warning"]) { --herald-notify-accent: #d98e1a; }
:host([type="error"]) { --herald-notify-accent: #c93c3c; }
.heading { margin: 0 0 4px; font-size: 1em; font-weight: 600; }
@keyframes herald-notify-fade-out {
  from { opacity: 1; }
  to { opacity: 0; }
}
"#;
