//! 焦点状态

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索框
    #[default]
    Search,
    /// 左侧国家列表
    Countries,
    /// 右侧记录表格
    Table,
}

impl FocusPanel {
    /// Tab：下一个面板
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::Countries,
            Self::Countries => Self::Table,
            Self::Table => Self::Search,
        }
    }

    /// Shift+Tab：上一个面板
    pub fn prev(self) -> Self {
        match self {
            Self::Search => Self::Table,
            Self::Countries => Self::Search,
            Self::Table => Self::Countries,
        }
    }

    /// 是否是搜索框
    pub fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }

    /// 是否是国家列表
    pub fn is_countries(self) -> bool {
        matches!(self, Self::Countries)
    }

    /// 是否是记录表格
    pub fn is_table(self) -> bool {
        matches!(self, Self::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let start = FocusPanel::default();
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.prev(), FocusPanel::Table);
        assert_eq!(FocusPanel::Countries.prev().next(), FocusPanel::Countries);
    }
}
