//! 共享测试工具和辅助函数

#![allow(dead_code)]

use wmi_browser_core::WmiRecord;

/// 构造只关心排序/筛选字段的记录
pub fn record(id: &str, country: &str, created_on: &str, wmi: &str) -> WmiRecord {
    WmiRecord {
        id: id.to_string(),
        country: country.to_string(),
        created_on: created_on.to_string(),
        wmi: wmi.to_string(),
        ..WmiRecord::default()
    }
}

/// 一组接近真实数据的样本（含空国家、缺失 UpdatedOn、重复键）
pub fn sample_records() -> Vec<WmiRecord> {
    vec![
        WmiRecord {
            id: "1".into(),
            name: "HONDA MOTOR CO., LTD".into(),
            country: "JAPAN".into(),
            vehicle_type: "Passenger Car".into(),
            wmi: "JHM".into(),
            date_available_to_public: "2015-01-01".into(),
            created_on: "2015-03-04".into(),
            updated_on: Some("2016-05-06".into()),
        },
        WmiRecord {
            id: "2".into(),
            name: "AMERICAN HONDA MOTOR CO., INC.".into(),
            country: "UNITED STATES (USA)".into(),
            vehicle_type: "Motorcycle".into(),
            wmi: "1HF".into(),
            date_available_to_public: "2015-01-01".into(),
            created_on: "2015-03-04".into(),
            updated_on: None,
        },
        WmiRecord {
            id: "3".into(),
            name: "HONDA OF CANADA MFG.".into(),
            country: "CANADA".into(),
            vehicle_type: "Multipurpose Passenger Vehicle (MPV)".into(),
            wmi: "2HK".into(),
            date_available_to_public: "2017-08-01".into(),
            created_on: "2017-08-02".into(),
            updated_on: None,
        },
        WmiRecord {
            id: "4".into(),
            name: "HONDA MFG. OF ALABAMA".into(),
            country: "UNITED STATES (USA)".into(),
            vehicle_type: "Truck".into(),
            wmi: "5FN".into(),
            date_available_to_public: "2011-06-01".into(),
            created_on: "2011-06-01".into(),
            updated_on: Some("2019-01-01".into()),
        },
        WmiRecord {
            id: "5".into(),
            name: "UNKNOWN PLANT".into(),
            country: String::new(),
            vehicle_type: "Trailer".into(),
            wmi: "ZZZ".into(),
            date_available_to_public: String::new(),
            created_on: "2001-01-01".into(),
            updated_on: None,
        },
    ]
}
