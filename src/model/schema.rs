//! IFC type taxonomy.
//!
//! Static single-inheritance tables covering the `IfcObject` and
//! `IfcRelationship` branches of the schema, plus the positional attribute
//! layouts of the relationship entities whose endpoints we read.
//!
//! [`Schema::Ifc4`] uses the IFC4 ADD2 TC1 tree plus the IFC4X3
//! infrastructure types. [`Schema::Ifc2x3`] applies [`IFC2X3_SUPERTYPES`]
//! on top of it: IFC2X3-only types are added and types that moved between
//! releases take their IFC2X3 parent (`IfcProject` is an `IfcObject`, there
//! is no `IfcSpatialElement`).
//!
//! STEP files spell type names in upper case (`IFCWALLSTANDARDCASE`); every
//! lookup here is case-insensitive and [`Schema::canonical_name`] maps them
//! back to the schema spelling. Names not in the table are their own only
//! ancestor.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Schema release a model is written against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Schema {
    Ifc2x3,
    /// IFC4 and its addenda, IFC4X3 included.
    #[default]
    Ifc4,
}

/// (type, supertype) pairs.
const SUPERTYPES: &[(&str, &str)] = &[
    // Root
    ("IfcObjectDefinition", "IfcRoot"),
    ("IfcRelationship", "IfcRoot"),
    ("IfcPropertyDefinition", "IfcRoot"),
    ("IfcObject", "IfcObjectDefinition"),
    ("IfcContext", "IfcObjectDefinition"),
    ("IfcTypeObject", "IfcObjectDefinition"),
    ("IfcProject", "IfcContext"),
    ("IfcProjectLibrary", "IfcContext"),
    // Actors, controls, processes, resources
    ("IfcActor", "IfcObject"),
    ("IfcOccupant", "IfcActor"),
    ("IfcControl", "IfcObject"),
    ("IfcActionRequest", "IfcControl"),
    ("IfcCostItem", "IfcControl"),
    ("IfcCostSchedule", "IfcControl"),
    ("IfcPerformanceHistory", "IfcControl"),
    ("IfcPermit", "IfcControl"),
    ("IfcProjectOrder", "IfcControl"),
    ("IfcWorkCalendar", "IfcControl"),
    ("IfcWorkControl", "IfcControl"),
    ("IfcWorkPlan", "IfcWorkControl"),
    ("IfcWorkSchedule", "IfcWorkControl"),
    ("IfcProcess", "IfcObject"),
    ("IfcEvent", "IfcProcess"),
    ("IfcProcedure", "IfcProcess"),
    ("IfcTask", "IfcProcess"),
    ("IfcResource", "IfcObject"),
    ("IfcConstructionResource", "IfcResource"),
    ("IfcConstructionEquipmentResource", "IfcConstructionResource"),
    ("IfcConstructionMaterialResource", "IfcConstructionResource"),
    ("IfcConstructionProductResource", "IfcConstructionResource"),
    ("IfcCrewResource", "IfcConstructionResource"),
    ("IfcLaborResource", "IfcConstructionResource"),
    ("IfcSubContractResource", "IfcConstructionResource"),
    // Groups
    ("IfcGroup", "IfcObject"),
    ("IfcAsset", "IfcGroup"),
    ("IfcInventory", "IfcGroup"),
    ("IfcStructuralLoadGroup", "IfcGroup"),
    ("IfcStructuralLoadCase", "IfcStructuralLoadGroup"),
    ("IfcStructuralResultGroup", "IfcGroup"),
    ("IfcSystem", "IfcGroup"),
    ("IfcBuildingSystem", "IfcSystem"),
    ("IfcBuiltSystem", "IfcSystem"),
    ("IfcDistributionSystem", "IfcSystem"),
    ("IfcDistributionCircuit", "IfcDistributionSystem"),
    ("IfcStructuralAnalysisModel", "IfcSystem"),
    ("IfcZone", "IfcSystem"),
    // Products
    ("IfcProduct", "IfcObject"),
    ("IfcAnnotation", "IfcProduct"),
    ("IfcGrid", "IfcProduct"),
    ("IfcProxy", "IfcProduct"),
    ("IfcPort", "IfcProduct"),
    ("IfcDistributionPort", "IfcPort"),
    ("IfcLinearElement", "IfcProduct"),
    ("IfcAlignmentCant", "IfcLinearElement"),
    ("IfcAlignmentHorizontal", "IfcLinearElement"),
    ("IfcAlignmentSegment", "IfcLinearElement"),
    ("IfcAlignmentVertical", "IfcLinearElement"),
    ("IfcPositioningElement", "IfcProduct"),
    ("IfcLinearPositioningElement", "IfcPositioningElement"),
    ("IfcAlignment", "IfcLinearPositioningElement"),
    ("IfcReferent", "IfcPositioningElement"),
    // Spatial
    ("IfcSpatialElement", "IfcProduct"),
    ("IfcSpatialStructureElement", "IfcSpatialElement"),
    ("IfcBuilding", "IfcSpatialStructureElement"),
    ("IfcBuildingStorey", "IfcSpatialStructureElement"),
    ("IfcSite", "IfcSpatialStructureElement"),
    ("IfcSpace", "IfcSpatialStructureElement"),
    ("IfcFacility", "IfcSpatialStructureElement"),
    ("IfcBridge", "IfcFacility"),
    ("IfcMarineFacility", "IfcFacility"),
    ("IfcRailway", "IfcFacility"),
    ("IfcRoad", "IfcFacility"),
    ("IfcFacilityPart", "IfcSpatialStructureElement"),
    ("IfcBridgePart", "IfcFacilityPart"),
    ("IfcFacilityPartCommon", "IfcFacilityPart"),
    ("IfcMarinePart", "IfcFacilityPart"),
    ("IfcRailwayPart", "IfcFacilityPart"),
    ("IfcRoadPart", "IfcFacilityPart"),
    ("IfcExternalSpatialStructureElement", "IfcSpatialElement"),
    ("IfcExternalSpatialElement", "IfcExternalSpatialStructureElement"),
    ("IfcSpatialZone", "IfcSpatialElement"),
    // Structural analysis
    ("IfcStructuralItem", "IfcProduct"),
    ("IfcStructuralConnection", "IfcStructuralItem"),
    ("IfcStructuralCurveConnection", "IfcStructuralConnection"),
    ("IfcStructuralPointConnection", "IfcStructuralConnection"),
    ("IfcStructuralSurfaceConnection", "IfcStructuralConnection"),
    ("IfcStructuralMember", "IfcStructuralItem"),
    ("IfcStructuralCurveMember", "IfcStructuralMember"),
    ("IfcStructuralCurveMemberVarying", "IfcStructuralCurveMember"),
    ("IfcStructuralSurfaceMember", "IfcStructuralMember"),
    ("IfcStructuralSurfaceMemberVarying", "IfcStructuralSurfaceMember"),
    ("IfcStructuralActivity", "IfcProduct"),
    ("IfcStructuralAction", "IfcStructuralActivity"),
    ("IfcStructuralCurveAction", "IfcStructuralAction"),
    ("IfcStructuralLinearAction", "IfcStructuralCurveAction"),
    ("IfcStructuralPointAction", "IfcStructuralAction"),
    ("IfcStructuralSurfaceAction", "IfcStructuralAction"),
    ("IfcStructuralPlanarAction", "IfcStructuralSurfaceAction"),
    ("IfcStructuralReaction", "IfcStructuralActivity"),
    ("IfcStructuralCurveReaction", "IfcStructuralReaction"),
    ("IfcStructuralPointReaction", "IfcStructuralReaction"),
    ("IfcStructuralSurfaceReaction", "IfcStructuralReaction"),
    // Elements
    ("IfcElement", "IfcProduct"),
    ("IfcBuildingElement", "IfcElement"),
    ("IfcBuiltElement", "IfcElement"),
    ("IfcBeam", "IfcBuildingElement"),
    ("IfcBeamStandardCase", "IfcBeam"),
    ("IfcBuildingElementProxy", "IfcBuildingElement"),
    ("IfcChimney", "IfcBuildingElement"),
    ("IfcColumn", "IfcBuildingElement"),
    ("IfcColumnStandardCase", "IfcColumn"),
    ("IfcCovering", "IfcBuildingElement"),
    ("IfcCurtainWall", "IfcBuildingElement"),
    ("IfcDoor", "IfcBuildingElement"),
    ("IfcDoorStandardCase", "IfcDoor"),
    ("IfcFooting", "IfcBuildingElement"),
    ("IfcMember", "IfcBuildingElement"),
    ("IfcMemberStandardCase", "IfcMember"),
    ("IfcPile", "IfcBuildingElement"),
    ("IfcPlate", "IfcBuildingElement"),
    ("IfcPlateStandardCase", "IfcPlate"),
    ("IfcRailing", "IfcBuildingElement"),
    ("IfcRamp", "IfcBuildingElement"),
    ("IfcRampFlight", "IfcBuildingElement"),
    ("IfcRoof", "IfcBuildingElement"),
    ("IfcShadingDevice", "IfcBuildingElement"),
    ("IfcSlab", "IfcBuildingElement"),
    ("IfcSlabElementedCase", "IfcSlab"),
    ("IfcSlabStandardCase", "IfcSlab"),
    ("IfcStair", "IfcBuildingElement"),
    ("IfcStairFlight", "IfcBuildingElement"),
    ("IfcWall", "IfcBuildingElement"),
    ("IfcWallElementedCase", "IfcWall"),
    ("IfcWallStandardCase", "IfcWall"),
    ("IfcWindow", "IfcBuildingElement"),
    ("IfcWindowStandardCase", "IfcWindow"),
    ("IfcBearing", "IfcBuiltElement"),
    ("IfcCourse", "IfcBuiltElement"),
    ("IfcDeepFoundation", "IfcBuiltElement"),
    ("IfcCaissonFoundation", "IfcDeepFoundation"),
    ("IfcEarthworksElement", "IfcBuiltElement"),
    ("IfcEarthworksFill", "IfcEarthworksElement"),
    ("IfcReinforcedSoil", "IfcEarthworksElement"),
    ("IfcKerb", "IfcBuiltElement"),
    ("IfcMooringDevice", "IfcBuiltElement"),
    ("IfcNavigationElement", "IfcBuiltElement"),
    ("IfcPavement", "IfcBuiltElement"),
    ("IfcRail", "IfcBuiltElement"),
    ("IfcTrackElement", "IfcBuiltElement"),
    ("IfcCivilElement", "IfcElement"),
    ("IfcElementAssembly", "IfcElement"),
    ("IfcElementComponent", "IfcElement"),
    ("IfcBuildingElementPart", "IfcElementComponent"),
    ("IfcDiscreteAccessory", "IfcElementComponent"),
    ("IfcFastener", "IfcElementComponent"),
    ("IfcImpactProtectionDevice", "IfcElementComponent"),
    ("IfcMechanicalFastener", "IfcElementComponent"),
    ("IfcReinforcingElement", "IfcElementComponent"),
    ("IfcReinforcingBar", "IfcReinforcingElement"),
    ("IfcReinforcingMesh", "IfcReinforcingElement"),
    ("IfcTendon", "IfcReinforcingElement"),
    ("IfcTendonAnchor", "IfcReinforcingElement"),
    ("IfcTendonConduit", "IfcReinforcingElement"),
    ("IfcSign", "IfcElementComponent"),
    ("IfcVibrationDamper", "IfcElementComponent"),
    ("IfcVibrationIsolator", "IfcElementComponent"),
    ("IfcFeatureElement", "IfcElement"),
    ("IfcFeatureElementAddition", "IfcFeatureElement"),
    ("IfcProjectionElement", "IfcFeatureElementAddition"),
    ("IfcFeatureElementSubtraction", "IfcFeatureElement"),
    ("IfcEarthworksCut", "IfcFeatureElementSubtraction"),
    ("IfcOpeningElement", "IfcFeatureElementSubtraction"),
    ("IfcOpeningStandardCase", "IfcOpeningElement"),
    ("IfcVoidingFeature", "IfcFeatureElementSubtraction"),
    ("IfcSurfaceFeature", "IfcFeatureElement"),
    ("IfcFurnishingElement", "IfcElement"),
    ("IfcFurniture", "IfcFurnishingElement"),
    ("IfcSystemFurnitureElement", "IfcFurnishingElement"),
    ("IfcGeographicElement", "IfcElement"),
    ("IfcGeotechnicalElement", "IfcElement"),
    ("IfcGeotechnicalAssembly", "IfcGeotechnicalElement"),
    ("IfcBorehole", "IfcGeotechnicalAssembly"),
    ("IfcGeomodel", "IfcGeotechnicalAssembly"),
    ("IfcGeoslice", "IfcGeotechnicalAssembly"),
    ("IfcGeotechnicalStratum", "IfcGeotechnicalElement"),
    ("IfcTransportElement", "IfcElement"),
    ("IfcVirtualElement", "IfcElement"),
    // Distribution control
    ("IfcDistributionElement", "IfcElement"),
    ("IfcDistributionControlElement", "IfcDistributionElement"),
    ("IfcActuator", "IfcDistributionControlElement"),
    ("IfcAlarm", "IfcDistributionControlElement"),
    ("IfcController", "IfcDistributionControlElement"),
    ("IfcFlowInstrument", "IfcDistributionControlElement"),
    ("IfcProtectiveDeviceTrippingUnit", "IfcDistributionControlElement"),
    ("IfcSensor", "IfcDistributionControlElement"),
    ("IfcUnitaryControlElement", "IfcDistributionControlElement"),
    // Distribution flow
    ("IfcDistributionFlowElement", "IfcDistributionElement"),
    ("IfcDistributionChamberElement", "IfcDistributionFlowElement"),
    ("IfcEnergyConversionDevice", "IfcDistributionFlowElement"),
    ("IfcAirToAirHeatRecovery", "IfcEnergyConversionDevice"),
    ("IfcBoiler", "IfcEnergyConversionDevice"),
    ("IfcBurner", "IfcEnergyConversionDevice"),
    ("IfcChiller", "IfcEnergyConversionDevice"),
    ("IfcCoil", "IfcEnergyConversionDevice"),
    ("IfcCondenser", "IfcEnergyConversionDevice"),
    ("IfcCooledBeam", "IfcEnergyConversionDevice"),
    ("IfcCoolingTower", "IfcEnergyConversionDevice"),
    ("IfcElectricGenerator", "IfcEnergyConversionDevice"),
    ("IfcElectricMotor", "IfcEnergyConversionDevice"),
    ("IfcEngine", "IfcEnergyConversionDevice"),
    ("IfcEvaporativeCooler", "IfcEnergyConversionDevice"),
    ("IfcEvaporator", "IfcEnergyConversionDevice"),
    ("IfcHeatExchanger", "IfcEnergyConversionDevice"),
    ("IfcHumidifier", "IfcEnergyConversionDevice"),
    ("IfcMotorConnection", "IfcEnergyConversionDevice"),
    ("IfcSolarDevice", "IfcEnergyConversionDevice"),
    ("IfcTransformer", "IfcEnergyConversionDevice"),
    ("IfcTubeBundle", "IfcEnergyConversionDevice"),
    ("IfcUnitaryEquipment", "IfcEnergyConversionDevice"),
    ("IfcFlowController", "IfcDistributionFlowElement"),
    ("IfcAirTerminalBox", "IfcFlowController"),
    ("IfcDamper", "IfcFlowController"),
    ("IfcDistributionBoard", "IfcFlowController"),
    ("IfcElectricDistributionBoard", "IfcFlowController"),
    ("IfcElectricTimeControl", "IfcFlowController"),
    ("IfcFlowMeter", "IfcFlowController"),
    ("IfcProtectiveDevice", "IfcFlowController"),
    ("IfcSwitchingDevice", "IfcFlowController"),
    ("IfcValve", "IfcFlowController"),
    ("IfcFlowFitting", "IfcDistributionFlowElement"),
    ("IfcCableCarrierFitting", "IfcFlowFitting"),
    ("IfcCableFitting", "IfcFlowFitting"),
    ("IfcDuctFitting", "IfcFlowFitting"),
    ("IfcJunctionBox", "IfcFlowFitting"),
    ("IfcPipeFitting", "IfcFlowFitting"),
    ("IfcFlowMovingDevice", "IfcDistributionFlowElement"),
    ("IfcCompressor", "IfcFlowMovingDevice"),
    ("IfcFan", "IfcFlowMovingDevice"),
    ("IfcPump", "IfcFlowMovingDevice"),
    ("IfcFlowSegment", "IfcDistributionFlowElement"),
    ("IfcCableCarrierSegment", "IfcFlowSegment"),
    ("IfcCableSegment", "IfcFlowSegment"),
    ("IfcConveyorSegment", "IfcFlowSegment"),
    ("IfcDuctSegment", "IfcFlowSegment"),
    ("IfcPipeSegment", "IfcFlowSegment"),
    ("IfcFlowStorageDevice", "IfcDistributionFlowElement"),
    ("IfcElectricFlowStorageDevice", "IfcFlowStorageDevice"),
    ("IfcTank", "IfcFlowStorageDevice"),
    ("IfcFlowTerminal", "IfcDistributionFlowElement"),
    ("IfcAirTerminal", "IfcFlowTerminal"),
    ("IfcAudioVisualAppliance", "IfcFlowTerminal"),
    ("IfcCommunicationsAppliance", "IfcFlowTerminal"),
    ("IfcElectricAppliance", "IfcFlowTerminal"),
    ("IfcFireSuppressionTerminal", "IfcFlowTerminal"),
    ("IfcLamp", "IfcFlowTerminal"),
    ("IfcLightFixture", "IfcFlowTerminal"),
    ("IfcLiquidTerminal", "IfcFlowTerminal"),
    ("IfcMedicalDevice", "IfcFlowTerminal"),
    ("IfcMobileTelecommunicationsAppliance", "IfcFlowTerminal"),
    ("IfcOutlet", "IfcFlowTerminal"),
    ("IfcSanitaryTerminal", "IfcFlowTerminal"),
    ("IfcSignal", "IfcFlowTerminal"),
    ("IfcSpaceHeater", "IfcFlowTerminal"),
    ("IfcStackTerminal", "IfcFlowTerminal"),
    ("IfcWasteTerminal", "IfcFlowTerminal"),
    ("IfcFlowTreatmentDevice", "IfcDistributionFlowElement"),
    ("IfcDuctSilencer", "IfcFlowTreatmentDevice"),
    ("IfcElectricFlowTreatmentDevice", "IfcFlowTreatmentDevice"),
    ("IfcFilter", "IfcFlowTreatmentDevice"),
    ("IfcInterceptor", "IfcFlowTreatmentDevice"),
    // Relationships
    ("IfcRelAssigns", "IfcRelationship"),
    ("IfcRelAssignsToActor", "IfcRelAssigns"),
    ("IfcRelAssignsToControl", "IfcRelAssigns"),
    ("IfcRelAssignsToGroup", "IfcRelAssigns"),
    ("IfcRelAssignsToGroupByFactor", "IfcRelAssignsToGroup"),
    ("IfcRelAssignsToProcess", "IfcRelAssigns"),
    ("IfcRelAssignsToProduct", "IfcRelAssigns"),
    ("IfcRelAssignsToResource", "IfcRelAssigns"),
    ("IfcRelAssociates", "IfcRelationship"),
    ("IfcRelAssociatesApproval", "IfcRelAssociates"),
    ("IfcRelAssociatesClassification", "IfcRelAssociates"),
    ("IfcRelAssociatesConstraint", "IfcRelAssociates"),
    ("IfcRelAssociatesDocument", "IfcRelAssociates"),
    ("IfcRelAssociatesLibrary", "IfcRelAssociates"),
    ("IfcRelAssociatesMaterial", "IfcRelAssociates"),
    ("IfcRelAssociatesProfileDef", "IfcRelAssociates"),
    ("IfcRelConnects", "IfcRelationship"),
    ("IfcRelAdheresToElement", "IfcRelConnects"),
    ("IfcRelConnectsElements", "IfcRelConnects"),
    ("IfcRelConnectsPathElements", "IfcRelConnectsElements"),
    ("IfcRelConnectsWithRealizingElements", "IfcRelConnectsElements"),
    ("IfcRelConnectsPortToElement", "IfcRelConnects"),
    ("IfcRelConnectsPorts", "IfcRelConnects"),
    ("IfcRelConnectsStructuralActivity", "IfcRelConnects"),
    ("IfcRelConnectsStructuralMember", "IfcRelConnects"),
    ("IfcRelConnectsWithEccentricity", "IfcRelConnectsStructuralMember"),
    ("IfcRelContainedInSpatialStructure", "IfcRelConnects"),
    ("IfcRelCoversBldgElements", "IfcRelConnects"),
    ("IfcRelCoversSpaces", "IfcRelConnects"),
    ("IfcRelFillsElement", "IfcRelConnects"),
    ("IfcRelFlowControlElements", "IfcRelConnects"),
    ("IfcRelInterferesElements", "IfcRelConnects"),
    ("IfcRelPositions", "IfcRelConnects"),
    ("IfcRelReferencedInSpatialStructure", "IfcRelConnects"),
    ("IfcRelSequence", "IfcRelConnects"),
    ("IfcRelServicesBuildings", "IfcRelConnects"),
    ("IfcRelSpaceBoundary", "IfcRelConnects"),
    ("IfcRelSpaceBoundary1stLevel", "IfcRelSpaceBoundary"),
    ("IfcRelSpaceBoundary2ndLevel", "IfcRelSpaceBoundary1stLevel"),
    ("IfcRelDeclares", "IfcRelationship"),
    ("IfcRelDecomposes", "IfcRelationship"),
    ("IfcRelAggregates", "IfcRelDecomposes"),
    ("IfcRelNests", "IfcRelDecomposes"),
    ("IfcRelProjectsElement", "IfcRelDecomposes"),
    ("IfcRelVoidsElement", "IfcRelDecomposes"),
    ("IfcRelDefines", "IfcRelationship"),
    ("IfcRelDefinesByObject", "IfcRelDefines"),
    ("IfcRelDefinesByProperties", "IfcRelDefines"),
    ("IfcRelDefinesByTemplate", "IfcRelDefines"),
    ("IfcRelDefinesByType", "IfcRelDefines"),
];

/// IFC2X3 types that are absent from IFC4, and types whose parent differs.
const IFC2X3_SUPERTYPES: &[(&str, &str)] = &[
    ("IfcProject", "IfcObject"),
    ("IfcSpatialStructureElement", "IfcProduct"),
    // Controls, groups, processes
    ("IfcConditionCriterion", "IfcControl"),
    ("IfcEquipmentStandard", "IfcControl"),
    ("IfcFurnitureStandard", "IfcControl"),
    ("IfcProjectOrderRecord", "IfcControl"),
    ("IfcScheduleTimeControl", "IfcControl"),
    ("IfcServiceLife", "IfcControl"),
    ("IfcSpaceProgram", "IfcControl"),
    ("IfcTimeSeriesSchedule", "IfcControl"),
    ("IfcCondition", "IfcGroup"),
    ("IfcElectricalCircuit", "IfcSystem"),
    ("IfcMove", "IfcTask"),
    ("IfcOrderAction", "IfcTask"),
    // Elements
    ("IfcElectricalElement", "IfcElement"),
    ("IfcEquipmentElement", "IfcElement"),
    ("IfcBuildingElementComponent", "IfcBuildingElement"),
    ("IfcBuildingElementPart", "IfcBuildingElementComponent"),
    ("IfcReinforcingElement", "IfcBuildingElementComponent"),
    ("IfcVibrationIsolator", "IfcDiscreteAccessory"),
    ("IfcMechanicalFastener", "IfcFastener"),
    ("IfcEdgeFeature", "IfcFeatureElementSubtraction"),
    ("IfcChamferEdgeFeature", "IfcEdgeFeature"),
    ("IfcRoundedEdgeFeature", "IfcEdgeFeature"),
    ("IfcElectricDistributionPoint", "IfcFlowController"),
    // Structural activities
    ("IfcStructuralLinearAction", "IfcStructuralAction"),
    ("IfcStructuralLinearActionVarying", "IfcStructuralLinearAction"),
    ("IfcStructuralPlanarAction", "IfcStructuralAction"),
    ("IfcStructuralPlanarActionVarying", "IfcStructuralPlanarAction"),
    // Relationships
    ("IfcRelAssignsTasks", "IfcRelAssignsToControl"),
    ("IfcRelAssignsToProjectOrder", "IfcRelAssignsToControl"),
    ("IfcRelSchedulesCostItems", "IfcRelAssignsToControl"),
    ("IfcRelOccupiesSpaces", "IfcRelAssignsToActor"),
    ("IfcRelAssociatesAppliedValue", "IfcRelAssociates"),
    ("IfcRelAssociatesProfileProperties", "IfcRelAssociates"),
    ("IfcRelConnectsStructuralElement", "IfcRelConnects"),
    ("IfcRelInteractionRequirements", "IfcRelConnects"),
    ("IfcRelProjectsElement", "IfcRelConnects"),
    ("IfcRelVoidsElement", "IfcRelConnects"),
    ("IfcRelOverridesProperties", "IfcRelDefinesByProperties"),
];

/// Explicit attribute names of relationship entities, in STEP order.
///
/// Subtypes not listed inherit the layout of their nearest listed
/// supertype; attributes they append are simply not named.
const LAYOUTS: &[(&str, &[&str])] = &[
    ("IfcRoot", &["GlobalId", "OwnerHistory", "Name", "Description"]),
    ("IfcRelAggregates", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatingObject", "RelatedObjects",
    ]),
    ("IfcRelNests", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatingObject", "RelatedObjects",
    ]),
    ("IfcRelAssignsToGroup", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatedObjects", "RelatedObjectsType", "RelatingGroup",
    ]),
    ("IfcRelConnectsElements", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "ConnectionGeometry", "RelatingElement", "RelatedElement",
    ]),
    ("IfcRelConnectsStructuralMember", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatingStructuralMember", "RelatedStructuralConnection",
        "AppliedCondition", "AdditionalConditions", "SupportedLength",
        "ConditionCoordinateSystem",
    ]),
    ("IfcRelContainedInSpatialStructure", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatedElements", "RelatingStructure",
    ]),
    ("IfcRelReferencedInSpatialStructure", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatedElements", "RelatingStructure",
    ]),
    ("IfcRelFillsElement", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatingOpeningElement", "RelatedBuildingElement",
    ]),
    ("IfcRelVoidsElement", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatingBuildingElement", "RelatedOpeningElement",
    ]),
    ("IfcRelSpaceBoundary", &[
        "GlobalId", "OwnerHistory", "Name", "Description",
        "RelatingSpace", "RelatedBuildingElement", "ConnectionGeometry",
        "PhysicalOrVirtualBoundary", "InternalOrExternalBoundary",
    ]),
];

struct Tables {
    /// upper-case name → canonical name
    canonical: HashMap<String, &'static str>,
    /// canonical name → supertype
    parent: HashMap<&'static str, &'static str>,
    layouts: HashMap<&'static str, &'static [&'static str]>,
}

impl Tables {
    /// Later layers override the parents set by earlier ones.
    fn build(layers: &[&[(&'static str, &'static str)]]) -> Self {
        let mut canonical = HashMap::new();
        let mut parent = HashMap::new();
        for &(child, sup) in layers.iter().flat_map(|layer| layer.iter()) {
            canonical.insert(child.to_ascii_uppercase(), child);
            canonical.insert(sup.to_ascii_uppercase(), sup);
            parent.insert(child, sup);
        }
        Tables {
            canonical,
            parent,
            layouts: LAYOUTS.iter().copied().collect(),
        }
    }
}

impl Schema {
    /// Schema of a `FILE_SCHEMA` identifier such as `IFC2X3` or `IFC4X3_ADD2`.
    pub fn from_identifier(identifier: &str) -> Option<Schema> {
        let id = identifier.trim().to_ascii_uppercase();
        if id.starts_with("IFC2X3") {
            Some(Schema::Ifc2x3)
        } else if id.starts_with("IFC4") {
            Some(Schema::Ifc4)
        } else {
            None
        }
    }

    fn tables(self) -> &'static Tables {
        static IFC4: OnceLock<Tables> = OnceLock::new();
        static IFC2X3: OnceLock<Tables> = OnceLock::new();
        match self {
            Schema::Ifc4 => IFC4.get_or_init(|| Tables::build(&[SUPERTYPES])),
            Schema::Ifc2x3 => {
                IFC2X3.get_or_init(|| Tables::build(&[SUPERTYPES, IFC2X3_SUPERTYPES]))
            }
        }
    }

    /// Map any spelling of a known type name to its schema spelling.
    pub fn canonical_name(self, name: &str) -> Option<&'static str> {
        self.tables().canonical.get(&name.to_ascii_uppercase()).copied()
    }

    /// Direct supertype of a known type.
    pub fn supertype(self, name: &str) -> Option<&'static str> {
        let canonical = self.canonical_name(name)?;
        self.tables().parent.get(canonical).copied()
    }

    /// True if `name` is `ancestor` or (transitively) one of its subtypes.
    pub fn is_a(self, name: &str, ancestor: &str) -> bool {
        if name.eq_ignore_ascii_case(ancestor) {
            return true;
        }
        let parent = &self.tables().parent;
        let mut current = self.supertype(name);
        while let Some(ty) = current {
            if ty.eq_ignore_ascii_case(ancestor) {
                return true;
            }
            current = parent.get(ty).copied();
        }
        false
    }

    /// Positional attribute names for a relationship type, inherited from
    /// the nearest supertype that declares a layout.
    pub fn attribute_names(self, name: &str) -> Option<&'static [&'static str]> {
        let t = self.tables();
        let mut current = self.canonical_name(name);
        while let Some(ty) = current {
            if let Some(layout) = t.layouts.get(ty) {
                return Some(*layout);
            }
            current = t.parent.get(ty).copied();
        }
        None
    }
}
