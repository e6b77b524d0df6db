//! Declaration emit message table.
//!
//! Each entry expands into a template in `diagnostic_messages`, a code in
//! `diagnostic_codes`, and a row in `DIAGNOSTIC_MESSAGES`.

use super::{DiagnosticCategory, DiagnosticMessage};

macro_rules! declare_messages {
    ($($name:ident = $code:literal, $category:ident, $text:literal;)*) => {
        pub mod diagnostic_messages {
            $(pub const $name: &str = $text;)*
        }

        pub mod diagnostic_codes {
            $(pub const $name: u32 = $code;)*
        }

        pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
            $(DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::$category,
                message: $text,
            },)*
        ];
    };
}

declare_messages! {
    // Inaccessible or unserializable inferred types
    THE_INFERRED_TYPE_OF_REFERENCES_AN_INACCESSIBLE_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY = 2527, Error,
        "The inferred type of '{0}' references an inaccessible '{1}' type. A type annotation is necessary.";
    THE_INFERRED_TYPE_OF_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_THIS_IS_LIKELY_NOT_PORTABLE = 2742, Error,
        "The inferred type of '{0}' cannot be named without a reference to '{1}'. This is likely not portable. A type annotation is necessary.";
    THE_INFERRED_TYPE_OF_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE = 5088, Error,
        "The inferred type of '{0}' references a type with a cyclic structure which cannot be trivially serialized. A type annotation is necessary.";
    THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH = 7056, Error,
        "The inferred type of this node exceeds the maximum length the compiler will serialize. An explicit type annotation is needed.";
    THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_CANNOT_BE_SERIALIZED = 4118, Error,
        "The type of this node cannot be serialized because its property '{0}' cannot be serialized.";
    PROPERTY_OF_EXPORTED_ANONYMOUS_CLASS_TYPE_MAY_NOT_BE_PRIVATE_OR_PROTECTED = 4094, Error,
        "Property '{0}' of exported anonymous class type may not be private or protected.";
    DECLARATION_AUGMENTS_DECLARATION_IN_ANOTHER_FILE_THIS_CANNOT_BE_SERIALIZED = 6232, Error,
        "Declaration augments declaration in another file. This cannot be serialized.";
    THIS_IS_THE_DECLARATION_BEING_AUGMENTED = 6233, Error,
        "This is the declaration being augmented. Consider moving the augmenting declaration into the same file.";
    DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME = 9005, Error,
        "Declaration emit for this file requires using private name '{0}'. An explicit type annotation may unblock declaration emit.";
    DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_FROM_MODULE = 9006, Error,
        "Declaration emit for this file requires using private name '{0}' from module '{1}'. An explicit type annotation may unblock declaration emit.";

    // Imports, aliases and default exports
    IMPORT_DECLARATION_IS_USING_PRIVATE_NAME = 4000, Error,
        "Import declaration '{0}' is using private name '{1}'.";
    EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME = 4081, Error,
        "Exported type alias '{0}' has or is using private name '{1}'.";
    DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME = 4082, Error,
        "Default export of the module has or is using private name '{0}'.";
    EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_FROM_MODULE = 4084, Error,
        "Exported type alias '{0}' has or is using private name '{1}' from module {2}.";

    // Type parameters
    TYPE_PARAMETER_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4002, Error,
        "Type parameter '{0}' of exported class has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4004, Error,
        "Type parameter '{0}' of exported interface has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4006, Error,
        "Type parameter '{0}' of constructor signature from exported interface has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4008, Error,
        "Type parameter '{0}' of call signature from exported interface has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4010, Error,
        "Type parameter '{0}' of public static method from exported class has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4012, Error,
        "Type parameter '{0}' of public method from exported class has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4014, Error,
        "Type parameter '{0}' of method from exported interface has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME = 4016, Error,
        "Type parameter '{0}' of exported function has or is using private name '{1}'.";
    TYPE_PARAMETER_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME = 4083, Error,
        "Type parameter '{0}' of exported type alias has or is using private name '{1}'.";
    TYPE_PARAMETER_FOR_THE_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME = 4103, Error,
        "Type parameter '{0}' for the exported mapped object type is using private name '{1}'.";

    // Heritage clauses
    IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4019, Error,
        "Implements clause of exported class '{0}' has or is using private name '{1}'.";
    EXTENDS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4020, Error,
        "'extends' clause of exported class '{0}' has or is using private name '{1}'.";
    EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4022, Error,
        "'extends' clause of exported interface '{0}' has or is using private name '{1}'.";

    // Variables and properties
    EXPORTED_VARIABLE_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4023, Error,
        "Exported variable '{0}' has or is using name '{1}' from external module {2} but cannot be named.";
    EXPORTED_VARIABLE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4024, Error,
        "Exported variable '{0}' has or is using name '{1}' from private module '{2}'.";
    EXPORTED_VARIABLE_HAS_OR_IS_USING_PRIVATE_NAME = 4025, Error,
        "Exported variable '{0}' has or is using private name '{1}'.";
    PUBLIC_STATIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4026, Error,
        "Public static property '{0}' of exported class has or is using name '{1}' from external module {2} but cannot be named.";
    PUBLIC_STATIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4027, Error,
        "Public static property '{0}' of exported class has or is using name '{1}' from private module '{2}'.";
    PUBLIC_STATIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4028, Error,
        "Public static property '{0}' of exported class has or is using private name '{1}'.";
    PUBLIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4029, Error,
        "Public property '{0}' of exported class has or is using name '{1}' from external module {2} but cannot be named.";
    PUBLIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4030, Error,
        "Public property '{0}' of exported class has or is using name '{1}' from private module '{2}'.";
    PUBLIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4031, Error,
        "Public property '{0}' of exported class has or is using private name '{1}'.";
    PROPERTY_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4032, Error,
        "Property '{0}' of exported interface has or is using name '{1}' from private module '{2}'.";
    PROPERTY_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4033, Error,
        "Property '{0}' of exported interface has or is using private name '{1}'.";

    // Accessors
    PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4034, Error,
        "Parameter type of public static setter '{0}' from exported class has or is using name '{1}' from private module '{2}'.";
    PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4035, Error,
        "Parameter type of public static setter '{0}' from exported class has or is using private name '{1}'.";
    PARAMETER_TYPE_OF_PUBLIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4036, Error,
        "Parameter type of public setter '{0}' from exported class has or is using name '{1}' from private module '{2}'.";
    PARAMETER_TYPE_OF_PUBLIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4037, Error,
        "Parameter type of public setter '{0}' from exported class has or is using private name '{1}'.";
    RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4038, Error,
        "Return type of public static getter '{0}' from exported class has or is using name '{1}' from external module {2} but cannot be named.";
    RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4039, Error,
        "Return type of public static getter '{0}' from exported class has or is using name '{1}' from private module '{2}'.";
    RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4040, Error,
        "Return type of public static getter '{0}' from exported class has or is using private name '{1}'.";
    RETURN_TYPE_OF_PUBLIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4041, Error,
        "Return type of public getter '{0}' from exported class has or is using name '{1}' from external module {2} but cannot be named.";
    RETURN_TYPE_OF_PUBLIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4042, Error,
        "Return type of public getter '{0}' from exported class has or is using name '{1}' from private module '{2}'.";
    RETURN_TYPE_OF_PUBLIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4043, Error,
        "Return type of public getter '{0}' from exported class has or is using private name '{1}'.";

    // Return types
    RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4044, Error,
        "Return type of constructor signature from exported interface has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4045, Error,
        "Return type of constructor signature from exported interface has or is using private name '{0}'.";
    RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4046, Error,
        "Return type of call signature from exported interface has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4047, Error,
        "Return type of call signature from exported interface has or is using private name '{0}'.";
    RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4048, Error,
        "Return type of index signature from exported interface has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4049, Error,
        "Return type of index signature from exported interface has or is using private name '{0}'.";
    RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4050, Error,
        "Return type of public static method from exported class has or is using name '{0}' from external module {1} but cannot be named.";
    RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4051, Error,
        "Return type of public static method from exported class has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4052, Error,
        "Return type of public static method from exported class has or is using private name '{0}'.";
    RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4053, Error,
        "Return type of public method from exported class has or is using name '{0}' from external module {1} but cannot be named.";
    RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4054, Error,
        "Return type of public method from exported class has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4055, Error,
        "Return type of public method from exported class has or is using private name '{0}'.";
    RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4056, Error,
        "Return type of method from exported interface has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4057, Error,
        "Return type of method from exported interface has or is using private name '{0}'.";
    RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4058, Error,
        "Return type of exported function has or is using name '{0}' from external module {1} but cannot be named.";
    RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4059, Error,
        "Return type of exported function has or is using name '{0}' from private module '{1}'.";
    RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME = 4060, Error,
        "Return type of exported function has or is using private name '{0}'.";

    // Parameters
    PARAMETER_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4061, Error,
        "Parameter '{0}' of constructor from exported class has or is using name '{1}' from external module {2} but cannot be named.";
    PARAMETER_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4062, Error,
        "Parameter '{0}' of constructor from exported class has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4063, Error,
        "Parameter '{0}' of constructor from exported class has or is using private name '{1}'.";
    PARAMETER_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4064, Error,
        "Parameter '{0}' of constructor signature from exported interface has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4065, Error,
        "Parameter '{0}' of constructor signature from exported interface has or is using private name '{1}'.";
    PARAMETER_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4066, Error,
        "Parameter '{0}' of call signature from exported interface has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4067, Error,
        "Parameter '{0}' of call signature from exported interface has or is using private name '{1}'.";
    PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4068, Error,
        "Parameter '{0}' of public static method from exported class has or is using name '{1}' from external module {2} but cannot be named.";
    PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4069, Error,
        "Parameter '{0}' of public static method from exported class has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4070, Error,
        "Parameter '{0}' of public static method from exported class has or is using private name '{1}'.";
    PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4071, Error,
        "Parameter '{0}' of public method from exported class has or is using name '{1}' from external module {2} but cannot be named.";
    PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4072, Error,
        "Parameter '{0}' of public method from exported class has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME = 4073, Error,
        "Parameter '{0}' of public method from exported class has or is using private name '{1}'.";
    PARAMETER_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4074, Error,
        "Parameter '{0}' of method from exported interface has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4075, Error,
        "Parameter '{0}' of method from exported interface has or is using private name '{1}'.";
    PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4076, Error,
        "Parameter '{0}' of exported function has or is using name '{1}' from external module {2} but cannot be named.";
    PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4077, Error,
        "Parameter '{0}' of exported function has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME = 4078, Error,
        "Parameter '{0}' of exported function has or is using private name '{1}'.";
    PARAMETER_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4091, Error,
        "Parameter '{0}' of index signature from exported interface has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME = 4092, Error,
        "Parameter '{0}' of index signature from exported interface has or is using private name '{1}'.";
    PARAMETER_OF_ACCESSOR_HAS_OR_IS_USING_PRIVATE_NAME = 4106, Error,
        "Parameter '{0}' of accessor has or is using private name '{1}'.";
    PARAMETER_OF_ACCESSOR_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE = 4107, Error,
        "Parameter '{0}' of accessor has or is using name '{1}' from private module '{2}'.";
    PARAMETER_OF_ACCESSOR_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED = 4108, Error,
        "Parameter '{0}' of accessor has or is using name '{1}' from external module '{2}' but cannot be named.";

    // Isolated declarations
    FUNCTION_MUST_HAVE_AN_EXPLICIT_RETURN_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS = 9007, Error,
        "Function must have an explicit return type annotation with --isolatedDeclarations.";
    METHOD_MUST_HAVE_AN_EXPLICIT_RETURN_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS = 9008, Error,
        "Method must have an explicit return type annotation with --isolatedDeclarations.";
    AT_LEAST_ONE_ACCESSOR_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS = 9009, Error,
        "At least one accessor must have an explicit type annotation with --isolatedDeclarations.";
    VARIABLE_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS = 9010, Error,
        "Variable must have an explicit type annotation with --isolatedDeclarations.";
    PARAMETER_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS = 9011, Error,
        "Parameter must have an explicit type annotation with --isolatedDeclarations.";
    PROPERTY_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS = 9012, Error,
        "Property must have an explicit type annotation with --isolatedDeclarations.";
    EXPRESSION_TYPE_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS = 9013, Error,
        "Expression type can't be inferred with --isolatedDeclarations.";
    COMPUTED_PROPERTIES_MUST_BE_NUMBER_OR_STRING_LITERALS_VARIABLES_OR_DOTTED_EXPRESSIONS = 9014, Error,
        "Computed properties must be number or string literals, variables or dotted expressions with --isolatedDeclarations.";
    OBJECTS_THAT_CONTAIN_SPREAD_ASSIGNMENTS_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS = 9015, Error,
        "Objects that contain spread assignments can't be inferred with --isolatedDeclarations.";
    OBJECTS_THAT_CONTAIN_SHORTHAND_PROPERTIES_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS = 9016, Error,
        "Objects that contain shorthand properties can't be inferred with --isolatedDeclarations.";
    ONLY_CONST_ARRAYS_CAN_BE_INFERRED_WITH_ISOLATED_DECLARATIONS = 9017, Error,
        "Only const arrays can be inferred with --isolatedDeclarations.";
    ARRAYS_WITH_SPREAD_ELEMENTS_CANT_INFERRED_WITH_ISOLATED_DECLARATIONS = 9018, Error,
        "Arrays with spread elements can't inferred with --isolatedDeclarations.";
    BINDING_ELEMENTS_CANT_BE_EXPORTED_DIRECTLY_WITH_ISOLATED_DECLARATIONS = 9019, Error,
        "Binding elements can't be exported directly with --isolatedDeclarations.";
    ENUM_MEMBER_INITIALIZERS_MUST_BE_COMPUTABLE_WITHOUT_REFERENCES_TO_EXTERNAL_SYMBOLS = 9020, Error,
        "Enum member initializers must be computable without references to external symbols with --isolatedDeclarations.";
    EXTENDS_CLAUSE_CANT_CONTAIN_AN_EXPRESSION_WITH_ISOLATED_DECLARATIONS = 9021, Error,
        "Extends clause can't contain an expression with --isolatedDeclarations.";
    INFERENCE_FROM_CLASS_EXPRESSIONS_IS_NOT_SUPPORTED_WITH_ISOLATED_DECLARATIONS = 9022, Error,
        "Inference from class expressions is not supported with --isolatedDeclarations.";
    ASSIGNING_PROPERTIES_TO_FUNCTIONS_WITHOUT_DECLARING_THEM_IS_NOT_SUPPORTED = 9023, Error,
        "Assigning properties to functions without declaring them is not supported with --isolatedDeclarations. Add an explicit declaration for the properties assigned to this function.";
    DECLARATION_EMIT_FOR_THIS_PARAMETER_REQUIRES_IMPLICITLY_ADDING_UNDEFINED = 9025, Error,
        "Declaration emit for this parameter requires implicitly adding undefined to its type. This is not supported with --isolatedDeclarations.";
    ADD_A_TYPE_ANNOTATION_TO_THE_VARIABLE = 9027, Message,
        "Add a type annotation to the variable {0}.";
    ADD_A_TYPE_ANNOTATION_TO_THE_PARAMETER = 9028, Message,
        "Add a type annotation to the parameter {0}.";
    ADD_A_TYPE_ANNOTATION_TO_THE_PROPERTY = 9029, Message,
        "Add a type annotation to the property {0}.";
    ADD_A_RETURN_TYPE_TO_THE_FUNCTION_DECLARATION = 9031, Message,
        "Add a return type to the function declaration.";
    ADD_A_RETURN_TYPE_TO_THE_METHOD = 9034, Message,
        "Add a return type to the method";
    DEFAULT_EXPORTS_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS = 9037, Error,
        "Default exports can't be inferred with --isolatedDeclarations.";
    COMPUTED_PROPERTY_NAMES_ON_CLASS_OR_OBJECT_LITERALS_CANNOT_BE_INFERRED = 9038, Error,
        "Computed property names on class or object literals cannot be inferred with --isolatedDeclarations.";
}
