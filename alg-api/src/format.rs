//! 结果输出格式

use alg_core::Binding;

/// 按固定小数位格式化数值
///
/// NaN 和无穷大使用完整单词，而不是 Rust 默认的 `NaN` / `inf`。
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// `name = value`
pub fn format_binding(binding: &Binding, precision: usize) -> String {
    format!("{} = {}", binding.name, format_value(binding.value, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(7.0, 6), "7.000000");
        assert_eq!(format_value(2.5, 2), "2.50");
        assert_eq!(format_value(1.0 / 3.0, 0), "0");
        assert_eq!(format_value(-0.5, 3), "-0.500");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_value(f64::NAN, 6), "NaN");
        assert_eq!(format_value(f64::INFINITY, 6), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY, 6), "-Infinity");
    }

    #[test]
    fn test_format_binding() {
        let binding = Binding {
            name: "x".to_string(),
            value: 7.0,
        };
        assert_eq!(format_binding(&binding, 6), "x = 7.000000");
    }
}
