//! CSS 解析器模块
//!
//! 此模块只负责读取元素内联 `style` 属性中的声明，供默认的块级布局判断使用。
//! 解析使用 cssparser 库完成，避免手写分号/冒号切分时误处理注释、
//! 引号字符串和 `!important` 等语法。
//!
//! # 使用示例
//!
//! ```rust
//! use dom_translation_nodes::parsers::css::get_declared_display;
//!
//! assert_eq!(
//!     get_declared_display("color: red; display: Block").as_deref(),
//!     Some("block")
//! );
//! ```

use cssparser::{Delimiter, ParseError, Parser, ParserInput};

/// 读取内联样式中声明的某个属性的第一个标识符值
///
/// 同名属性出现多次时，以最后一个能解析的声明为准；返回值统一为小写。
/// 无法解析的声明会被忽略，不会影响后续声明。
pub fn get_declared_ident(style: &str, property: &str) -> Option<String> {
    let mut input = ParserInput::new(style);
    let mut parser = Parser::new(&mut input);
    let mut value = None;

    while !parser.is_exhausted() {
        let declaration: Result<Option<String>, ParseError<'_, ()>> =
            parser.parse_until_after(Delimiter::Semicolon, |p| {
                let name = p.expect_ident()?.clone();
                p.expect_colon()?;

                let ident = if name.eq_ignore_ascii_case(property) {
                    Some(p.expect_ident()?.to_ascii_lowercase())
                } else {
                    None
                };

                // Drain the rest of the declaration (e.g. `!important`)
                while p.next().is_ok() {}

                Ok(ident)
            });

        if let Ok(Some(ident)) = declaration {
            value = Some(ident);
        }
    }

    value
}

/// 读取内联样式中声明的 `display` 值
pub fn get_declared_display(style: &str) -> Option<String> {
    get_declared_ident(style, "display")
}
