//! Fixed IRI vocabulary of the emitted shapes graph.
//!
//! Every predicate, class, and datatype the compiler writes comes from this
//! module. The values must stay bit-exact with the W3C SHACL, RDF, and XSD
//! namespaces for downstream validators to recognize them.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// SHACL namespace.
pub const SH: &str = "http://www.w3.org/ns/shacl#";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:first`.
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
/// `rdf:rest`.
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
/// `rdf:nil`.
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

/// `sh:NodeShape`.
pub const SH_NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
/// `sh:closed`.
pub const SH_CLOSED: &str = "http://www.w3.org/ns/shacl#closed";
/// `sh:ignoredProperties`.
pub const SH_IGNORED_PROPERTIES: &str = "http://www.w3.org/ns/shacl#ignoredProperties";
/// `sh:targetClass`.
pub const SH_TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";
/// `sh:property`.
pub const SH_PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
/// `sh:path`.
pub const SH_PATH: &str = "http://www.w3.org/ns/shacl#path";
/// `sh:or`.
pub const SH_OR: &str = "http://www.w3.org/ns/shacl#or";
/// `sh:datatype`.
pub const SH_DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
/// `sh:class`.
pub const SH_CLASS: &str = "http://www.w3.org/ns/shacl#class";
/// `sh:in`.
pub const SH_IN: &str = "http://www.w3.org/ns/shacl#in";
/// `sh:defaultValue`.
pub const SH_DEFAULT_VALUE: &str = "http://www.w3.org/ns/shacl#defaultValue";
/// `sh:minCount`.
pub const SH_MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
/// `sh:maxCount`.
pub const SH_MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
/// `sh:minInclusive`.
pub const SH_MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";
/// `sh:maxInclusive`.
pub const SH_MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";
/// `sh:pattern`.
pub const SH_PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";
/// `sh:name`.
pub const SH_NAME: &str = "http://www.w3.org/ns/shacl#name";
/// `sh:description`.
pub const SH_DESCRIPTION: &str = "http://www.w3.org/ns/shacl#description";
/// `sh:order`.
pub const SH_ORDER: &str = "http://www.w3.org/ns/shacl#order";
/// `sh:nodeKind`.
pub const SH_NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
/// `sh:Literal` node kind.
pub const SH_LITERAL: &str = "http://www.w3.org/ns/shacl#Literal";
/// `sh:IRI` node kind.
pub const SH_IRI: &str = "http://www.w3.org/ns/shacl#IRI";
/// `sh:BlankNodeOrIRI` node kind.
pub const SH_BLANK_NODE_OR_IRI: &str = "http://www.w3.org/ns/shacl#BlankNodeOrIRI";

// XSD datatypes
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:decimal`.
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:float`.
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
/// `xsd:double`.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:date`.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:dateTime`.
pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
/// `xsd:time`.
pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
/// `xsd:anyURI`.
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
