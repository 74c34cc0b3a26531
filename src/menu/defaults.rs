use super::MenuRecord;

/// The fixed menu used when no menu could be loaded: system management only.
pub fn default_menu_records() -> Vec<MenuRecord> {
    vec![
        MenuRecord::new(1, 0, "系统管理", "/system").with_icon("Setting"),
        MenuRecord::new(2, 1, "用户管理", "/system/users")
            .with_icon("User")
            .with_component("system/Users"),
        MenuRecord::new(3, 1, "角色管理", "/system/roles")
            .with_icon("UserFilled")
            .with_component("system/Roles"),
        MenuRecord::new(4, 1, "权限管理", "/system/permissions")
            .with_icon("Lock")
            .with_component("system/Permissions"),
    ]
}

/// Local menu served by the `local` source: every business area plus statistics.
pub fn demo_menu_records() -> Vec<MenuRecord> {
    let mut records = default_menu_records();
    records.extend([
        MenuRecord::new(5, 0, "职位管理", "/jobs").with_icon("BriefcaseFilled"),
        MenuRecord::new(6, 5, "职位列表", "/jobs/list")
            .with_icon("List")
            .with_component("jobs/JobList"),
        MenuRecord::new(7, 5, "职位分类", "/jobs/categories")
            .with_icon("Operation")
            .with_component("jobs/Categories"),
        MenuRecord::new(8, 0, "简历管理", "/resume").with_icon("DocumentFilled"),
        MenuRecord::new(9, 8, "简历库", "/resume/library")
            .with_icon("Document")
            .with_component("resume/Library"),
        MenuRecord::new(10, 8, "简历解析", "/resume/parse")
            .with_icon("Operation")
            .with_component("resume/Parse"),
        MenuRecord::new(11, 0, "企业管理", "/company").with_icon("OfficeBuilding"),
        MenuRecord::new(12, 11, "企业列表", "/company/list")
            .with_icon("List")
            .with_component("company/CompanyList"),
        MenuRecord::new(13, 11, "企业认证", "/company/auth")
            .with_icon("Lock")
            .with_component("company/Auth"),
        MenuRecord::new(14, 0, "数据统计", "/statistics").with_icon("DataAnalysis"),
        MenuRecord::new(15, 14, "用户统计", "/statistics/user")
            .with_icon("User")
            .with_component("statistics/UserStats"),
        MenuRecord::new(16, 14, "业务统计", "/statistics/business")
            .with_icon("Operation")
            .with_component("statistics/BusinessStats"),
    ]);
    records
}
