//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ListMessage, ModalMessage, SearchMessage};
use crate::model::{App, FocusPanel};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮循环自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Reload;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // Shift+Tab 在大多数终端上报告为 BackTab（可能带 SHIFT 修饰）
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    match app.focus {
        FocusPanel::Search => handle_search_keys(key),
        FocusPanel::Countries => handle_list_keys(key).map_or_else(
            || handle_browse_keys(key),
            AppMessage::Countries,
        ),
        FocusPanel::Table => handle_list_keys(key).map_or_else(
            || handle_browse_keys(key),
            AppMessage::Table,
        ),
    }
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE.matches(&key)
        || DefaultKeymap::CONFIRM.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('q'))
    {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}

/// 是否为可输入的字符修饰键组合
///
/// AltGr 在多数终端上报告为 CONTROL | ALT（部分布局再加 SHIFT），
/// `| [ ] { } \` 等字符只能这样输入
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let rest = if modifiers.contains(altgr) {
        modifiers.difference(altgr)
    } else {
        modifiers
    };
    rest.difference(KeyModifiers::SHIFT).is_empty()
}

/// 处理搜索框按键：所有可打印字符都进入搜索框（包括 q 和 ?）
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char(c) if is_text_input(key.modifiers) => {
            AppMessage::Search(SearchMessage::Input(c))
        }
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        KeyCode::Enter | KeyCode::Down => AppMessage::FocusNext,
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}

/// 处理列表/表格的光标按键
fn handle_list_keys(key: KeyEvent) -> Option<ListMessage> {
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return None;
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ListMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ListMessage::SelectNext,
        KeyCode::Home | KeyCode::Char('g') => ListMessage::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => ListMessage::SelectLast,
        KeyCode::PageUp => ListMessage::PageUp,
        KeyCode::PageDown => ListMessage::PageDown,
        _ => return None,
    };
    Some(msg)
}

/// 非输入状态下的单键快捷键
fn handle_browse_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char('q') => AppMessage::Quit,
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Char('/') => AppMessage::FocusSearch,
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}
