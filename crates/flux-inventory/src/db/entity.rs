/// 位置实体
pub mod location {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "location")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(Some(255))")]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::device::Entity")]
        Device,
    }

    impl Related<super::device::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Device.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// API 用户实体
pub mod api_user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "api_user")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(Some(255))")]
        pub name: String,
        #[sea_orm(column_type = "String(Some(255))", unique)]
        pub email: String,
        /// Argon2 PHC 字符串
        #[sea_orm(column_type = "String(Some(255))")]
        pub password: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::device::Entity")]
        Device,
    }

    impl Related<super::device::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Device.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// 设备实体
pub mod device {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "device")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(Some(255))")]
        pub name: String,
        #[sea_orm(column_name = "type", column_type = "String(Some(255))")]
        pub device_type: String,
        #[sea_orm(column_type = "String(Some(255))")]
        pub login: String,
        #[sea_orm(column_type = "String(Some(255))")]
        pub password: String,
        pub location_id: i32,
        pub api_user_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::location::Entity",
            from = "Column::LocationId",
            to = "super::location::Column::Id"
        )]
        Location,
        #[sea_orm(
            belongs_to = "super::api_user::Entity",
            from = "Column::ApiUserId",
            to = "super::api_user::Column::Id"
        )]
        ApiUser,
    }

    impl Related<super::location::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Location.def()
        }
    }

    impl Related<super::api_user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ApiUser.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
