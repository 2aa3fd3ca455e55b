//! # Changeset Module
//!
//! Reads a Liquibase `createTable` changeset and turns it into the immutable
//! [`TableSchema`] every artifact is generated from.
//!
//! ```xml
//! <changeSet id="1" author="author">
//!     <createTable tableName="user_profile">
//!         <column name="id" type="bigint">
//!             <constraints primaryKey="true" nullable="false"/>
//!         </column>
//!         <column name="first_name" type="varchar(255)"/>
//!         <column name="email" type="varchar(255)"/>
//!     </createTable>
//! </changeSet>
//! ```
//!
//! yields a schema for entity `UserProfile` with two columns, `first_name` and
//! `email`. The `id` column is the identity column and is never materialized.

mod load;
mod types;


pub use load::*;
pub use types::*;
