//! 记录浏览状态
//!
//! 持有完整的源数据与当前的 `FilterQuery`，每次选择变化后
//! 同步调用 `wmi_browser_core::derive` 重新计算视图。

use wmi_browser_core::{derive, extract_countries, CoreError, DerivedView, FilterQuery, WmiRecord};

/// 翻页步长
const PAGE_SIZE: usize = 10;

/// 记录浏览状态
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 最近一次加载得到的完整记录（保持接口返回的顺序）
    pub source: Vec<WmiRecord>,
    /// 当前筛选条件
    pub query: FilterQuery,
    /// 当前显示的视图
    pub view: DerivedView,
    /// 国家列表中的光标位置
    pub country_selected: usize,
    /// 记录表格中的光标位置
    pub table_selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 是否至少成功加载过一次
    pub loaded: bool,
    /// 搜索表达式无效时的错误信息
    pub search_error: Option<String>,
    /// 最近一次加载失败的信息
    pub load_error: Option<String>,
}

impl RecordsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标记开始加载
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    /// 加载成功，替换源数据并重新计算
    pub fn set_records(&mut self, records: Vec<WmiRecord>) {
        self.source = records;
        self.loading = false;
        self.loaded = true;
        self.load_error = None;

        // 重新加载后原先选择的国家可能已不存在
        if self.query.restricts_country()
            && !self
                .source
                .iter()
                .any(|r| r.country == self.query.selected_country)
        {
            self.query.selected_country = FilterQuery::default().selected_country;
        }

        if self.refresh().is_err() {
            // 旧视图属于旧数据，不能保留；只显示新的国家列表
            self.view = DerivedView {
                countries: extract_countries(&self.source),
                records: Vec::new(),
            };
        }
        self.sync_country_cursor();
        self.table_selected = 0;
    }

    /// 加载失败，保留已有数据
    pub fn set_load_error(&mut self, error: &CoreError) {
        self.loading = false;
        self.load_error = Some(error.to_string());
    }

    /// 用当前条件重新计算视图
    ///
    /// 搜索表达式无效时保留上一次的有效视图。
    pub fn refresh(&mut self) -> Result<(), CoreError> {
        match derive(&self.source, &self.query) {
            Ok(view) => {
                self.view = view;
                self.search_error = None;
                self.clamp_table_cursor();
                Ok(())
            }
            Err(e) => {
                log::debug!("keeping previous view: {e}");
                self.search_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 当前搜索框内容
    pub fn search_text(&self) -> &str {
        &self.query.search_text
    }

    /// 追加一个字符
    pub fn push_search_char(&mut self, c: char) {
        self.query.search_text.push(c);
        let _ = self.refresh();
    }

    /// 删除最后一个字符
    pub fn pop_search_char(&mut self) {
        if self.query.search_text.pop().is_some() {
            let _ = self.refresh();
        }
    }

    /// 清空搜索框
    pub fn clear_search(&mut self) {
        if !self.query.search_text.is_empty() {
            self.query.search_text.clear();
            let _ = self.refresh();
        }
    }

    /// 选中国家列表中的某一项并立即应用
    ///
    /// 搜索表达式无效时表格无法重新计算，国家选择保持不变。
    pub fn select_country_index(&mut self, index: usize) {
        if self.search_error.is_some() {
            return;
        }
        let Some(country) = self.view.countries.get(index) else {
            return;
        };
        self.country_selected = index;
        if *country != self.query.selected_country {
            self.query.selected_country.clone_from(country);
            self.table_selected = 0;
            let _ = self.refresh();
        }
    }

    pub fn select_country_previous(&mut self) {
        self.select_country_index(self.country_selected.saturating_sub(1));
    }

    pub fn select_country_next(&mut self) {
        self.select_country_index(self.country_selected + 1);
    }

    pub fn select_country_first(&mut self) {
        self.select_country_index(0);
    }

    pub fn select_country_last(&mut self) {
        if let Some(last) = self.view.countries.len().checked_sub(1) {
            self.select_country_index(last);
        }
    }

    pub fn select_country_page_up(&mut self) {
        self.select_country_index(self.country_selected.saturating_sub(PAGE_SIZE));
    }

    pub fn select_country_page_down(&mut self) {
        let last = self.view.countries.len().saturating_sub(1);
        self.select_country_index((self.country_selected + PAGE_SIZE).min(last));
    }

    pub fn select_row_previous(&mut self) {
        self.table_selected = self.table_selected.saturating_sub(1);
    }

    pub fn select_row_next(&mut self) {
        if self.table_selected + 1 < self.view.total() {
            self.table_selected += 1;
        }
    }

    pub fn select_row_first(&mut self) {
        self.table_selected = 0;
    }

    pub fn select_row_last(&mut self) {
        self.table_selected = self.view.total().saturating_sub(1);
    }

    pub fn select_row_page_up(&mut self) {
        self.table_selected = self.table_selected.saturating_sub(PAGE_SIZE);
    }

    pub fn select_row_page_down(&mut self) {
        self.table_selected =
            (self.table_selected + PAGE_SIZE).min(self.view.total().saturating_sub(1));
    }

    fn sync_country_cursor(&mut self) {
        self.country_selected = self
            .view
            .countries
            .iter()
            .position(|c| *c == self.query.selected_country)
            .unwrap_or(0);
    }

    fn clamp_table_cursor(&mut self) {
        let last = self.view.total().saturating_sub(1);
        if self.table_selected > last {
            self.table_selected = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use wmi_browser_core::ALL_COUNTRIES;

    use super::*;

    fn record(wmi: &str, country: &str, created_on: &str) -> WmiRecord {
        WmiRecord {
            wmi: wmi.into(),
            country: country.into(),
            created_on: created_on.into(),
            ..WmiRecord::default()
        }
    }

    fn loaded_state() -> RecordsState {
        let mut state = RecordsState::new();
        state.start_loading();
        state.set_records(vec![
            record("1HG", "UNITED STATES (USA)", "2020-01-01"),
            record("JHM", "JAPAN", "2022-05-01"),
            record("2HG", "CANADA", "2021-03-15"),
            record("JH2", "JAPAN", "2019-07-30"),
        ]);
        state
    }

    fn wmis(state: &RecordsState) -> Vec<&str> {
        state.view.records.iter().map(|r| r.wmi.as_str()).collect()
    }

    #[test]
    fn test_set_records_derives_view() {
        let state = loaded_state();
        assert!(!state.loading);
        assert!(state.loaded);
        assert_eq!(state.view.total(), 4);
        assert_eq!(wmis(&state), vec!["JHM", "2HG", "1HG", "JH2"]);
        assert_eq!(
            state.view.countries,
            vec![ALL_COUNTRIES, "UNITED STATES (USA)", "JAPAN", "CANADA"]
        );
        assert_eq!(state.country_selected, 0);
    }

    #[test]
    fn test_country_selection_applies_immediately() {
        let mut state = loaded_state();
        state.select_country_index(2);
        assert_eq!(state.query.selected_country, "JAPAN");
        assert_eq!(wmis(&state), vec!["JHM", "JH2"]);

        state.select_country_first();
        assert_eq!(state.view.total(), 4);
    }

    #[test]
    fn test_country_cursor_bounds() {
        let mut state = loaded_state();
        state.select_country_previous();
        assert_eq!(state.country_selected, 0);

        state.select_country_last();
        assert_eq!(state.query.selected_country, "CANADA");
        state.select_country_next();
        assert_eq!(state.country_selected, 3);
    }

    #[test]
    fn test_typing_recomputes() {
        let mut state = loaded_state();
        for c in "jh".chars() {
            state.push_search_char(c);
        }
        assert_eq!(wmis(&state), vec!["JHM", "JH2"]);

        state.pop_search_char();
        assert_eq!(state.search_text(), "j");

        state.clear_search();
        assert_eq!(state.view.total(), 4);
    }

    #[test]
    fn test_invalid_pattern_keeps_last_view() {
        let mut state = loaded_state();
        state.push_search_char('J');
        let before = state.view.clone();

        state.push_search_char('[');
        assert!(state.search_error.is_some());
        assert_eq!(state.view, before);

        state.pop_search_char();
        assert!(state.search_error.is_none());
    }

    #[test]
    fn test_country_locked_while_pattern_invalid() {
        let mut state = loaded_state();
        state.push_search_char('(');
        let before = state.view.clone();

        state.select_country_index(2);
        state.select_country_next();
        assert_eq!(state.country_selected, 0);
        assert_eq!(state.query.selected_country, ALL_COUNTRIES);
        assert_eq!(state.view, before);

        state.pop_search_char();
        state.select_country_index(2);
        assert_eq!(state.query.selected_country, "JAPAN");
        assert_eq!(wmis(&state), vec!["JHM", "JH2"]);
    }

    #[test]
    fn test_reload_with_invalid_pattern_clears_rows() {
        let mut state = loaded_state();
        state.push_search_char('(');
        state.set_records(vec![record("VF1", "FRANCE", "2023-01-01")]);

        assert!(state.search_error.is_some());
        assert!(state.view.records.is_empty());
        assert_eq!(state.view.countries, vec![ALL_COUNTRIES, "FRANCE"]);
    }

    #[test]
    fn test_reload_drops_vanished_country() {
        let mut state = loaded_state();
        state.select_country_index(3);
        assert_eq!(state.query.selected_country, "CANADA");

        state.set_records(vec![record("JHM", "JAPAN", "2022-05-01")]);
        assert_eq!(state.query.selected_country, ALL_COUNTRIES);
        assert_eq!(state.country_selected, 0);
        assert_eq!(state.view.total(), 1);
    }

    #[test]
    fn test_reload_keeps_existing_country() {
        let mut state = loaded_state();
        state.select_country_index(2);

        state.set_records(vec![
            record("VF1", "FRANCE", "2023-01-01"),
            record("JHM", "JAPAN", "2022-05-01"),
        ]);
        assert_eq!(state.query.selected_country, "JAPAN");
        assert_eq!(state.country_selected, 2);
        assert_eq!(wmis(&state), vec!["JHM"]);
    }

    #[test]
    fn test_load_error_keeps_data() {
        let mut state = loaded_state();
        state.start_loading();
        state.set_load_error(&CoreError::Timeout("no response".into()));

        assert!(!state.loading);
        assert!(state.load_error.is_some());
        assert_eq!(state.view.total(), 4);
    }

    #[test]
    fn test_table_cursor() {
        let mut state = loaded_state();
        state.select_row_previous();
        assert_eq!(state.table_selected, 0);

        state.select_row_page_down();
        assert_eq!(state.table_selected, 3);
        state.select_row_next();
        assert_eq!(state.table_selected, 3);
        assert_eq!(state.view.records[state.table_selected].wmi, "JH2");

        state.select_row_first();
        state.select_row_last();
        assert_eq!(state.table_selected, 3);

        // 筛选后光标不越界
        state.push_search_char('2');
        assert!(state.table_selected < state.view.total());
    }
}
