use touch_typing_lib::{layout, Config};

/// Builds the window's stylesheet from the configured theme.
pub fn stylesheet(config: &Config) -> String {
    let theme = &config.theme;
    let background = theme.background.to_css();
    let key_normal = theme.key_normal.to_css();
    let key_pressed = theme.key_pressed.to_css();
    let key_border = theme.key_border.to_css();
    let key_size = config.keyboard.key_size;
    let columns = layout::keys_per_row();
    let font_family = &config.text.font_family;
    let font_size = config.text.font_size;
    let text_rows = config.text.rows;
    let text_cols = config.text.cols;

    format!(
        "
html, body {{ margin: 0; height: 100%; background: {background}; }}
.tutor {{ display: flex; flex-direction: column; height: 100%; outline: none; }}
.text {{
    flex: 1;
    margin: 0;
    padding: 4px;
    min-height: {text_rows}em;
    min-width: {text_cols}ch;
    overflow: auto;
    white-space: pre-wrap;
    font-family: {font_family};
    font-size: {font_size}px;
}}
.caret {{ border-left: 1px solid black; margin-right: -1px; }}
.keys {{
    display: grid;
    grid-template-columns: repeat({columns}, {key_size}px);
    gap: 1px;
    background: {background};
}}
.key {{
    height: {key_size}px;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 1px solid {key_border};
    background: {key_normal};
    font-family: sans-serif;
    font-size: 12px;
    user-select: none;
}}
.key.pressed {{ background: {key_pressed}; }}
"
    )
}
