use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use serde::Serialize;
use std::sync::Arc;

/// A top-level definition within a [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Definition {
    OperationDefinition(Arc<OperationDefinition>),
    FragmentDefinition(Arc<FragmentDefinition>),
    SchemaDefinition(Arc<SchemaDefinition>),
    ScalarTypeDefinition(Arc<ScalarTypeDefinition>),
    ObjectTypeDefinition(Arc<ObjectTypeDefinition>),
    InterfaceTypeDefinition(Arc<InterfaceTypeDefinition>),
    UnionTypeDefinition(Arc<UnionTypeDefinition>),
    EnumTypeDefinition(Arc<EnumTypeDefinition>),
    InputObjectTypeDefinition(Arc<InputObjectTypeDefinition>),
    DirectiveDefinition(Arc<DirectiveDefinition>),
    SchemaExtension(Arc<SchemaExtension>),
    ScalarTypeExtension(Arc<ScalarTypeExtension>),
    ObjectTypeExtension(Arc<ObjectTypeExtension>),
    InterfaceTypeExtension(Arc<InterfaceTypeExtension>),
    UnionTypeExtension(Arc<UnionTypeExtension>),
    EnumTypeExtension(Arc<EnumTypeExtension>),
    InputObjectTypeExtension(Arc<InputObjectTypeExtension>),
}

impl Definition {
    /// Operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::OperationDefinition(_) | Self::FragmentDefinition(_),
        )
    }

    pub fn is_type_system_extension(&self) -> bool {
        matches!(
            self,
            Self::SchemaExtension(_)
                | Self::ScalarTypeExtension(_)
                | Self::ObjectTypeExtension(_)
                | Self::InterfaceTypeExtension(_)
                | Self::UnionTypeExtension(_)
                | Self::EnumTypeExtension(_)
                | Self::InputObjectTypeExtension(_),
        )
    }
}

ast_union!(Definition {
    OperationDefinition(OperationDefinition),
    FragmentDefinition(FragmentDefinition),
    SchemaDefinition(SchemaDefinition),
    ScalarTypeDefinition(ScalarTypeDefinition),
    ObjectTypeDefinition(ObjectTypeDefinition),
    InterfaceTypeDefinition(InterfaceTypeDefinition),
    UnionTypeDefinition(UnionTypeDefinition),
    EnumTypeDefinition(EnumTypeDefinition),
    InputObjectTypeDefinition(InputObjectTypeDefinition),
    DirectiveDefinition(DirectiveDefinition),
    SchemaExtension(SchemaExtension),
    ScalarTypeExtension(ScalarTypeExtension),
    ObjectTypeExtension(ObjectTypeExtension),
    InterfaceTypeExtension(InterfaceTypeExtension),
    UnionTypeExtension(UnionTypeExtension),
    EnumTypeExtension(EnumTypeExtension),
    InputObjectTypeExtension(InputObjectTypeExtension),
});
